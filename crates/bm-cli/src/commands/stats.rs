pub fn run(opts: &super::Options) -> Result<(), String> {
    let diviner = super::open(opts)?;
    let stats = diviner.get_divination_statistics();

    if opts.json {
        return super::print_json(&stats);
    }

    println!("  hexagrams:      {}", stats.total_hexagrams);
    println!("  trigrams:       {}", stats.total_trigrams);
    println!("  fully authored: {}", stats.fully_authored);
    println!("  engine:         {}", stats.engine);
    println!("  casting:        {}", stats.casting_method);
    println!("  status:         {}", stats.system_status);

    Ok(())
}
