fn main() -> anyhow::Result<()> {
    curriculum_cli::run()
}
