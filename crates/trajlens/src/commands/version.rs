pub fn run() -> anyhow::Result<()> {
    println!("trajlens {}", env!("CARGO_PKG_VERSION"));
    println!("Trajectory analytics for SWE-agent style runs");
    Ok(())
}
