fn main() -> eyre::Result<()> {
    practice_archive::main()
}
