use taskman::commands::Cli;

fn main() -> anyhow::Result<()> {
    Cli::menu()
}
