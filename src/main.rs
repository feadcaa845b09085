fn main() -> anyhow::Result<()> {
    protoviz::app::run()
}
