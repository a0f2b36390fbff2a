use colored::Colorize;

pub fn run(opts: &super::Options) -> Result<(), String> {
    let mut diviner = super::open(opts)?;
    let record = diviner.perform_simple_divination();

    if opts.json {
        return super::print_json(&record);
    }

    println!("  {} the coins ({})", "Casting".bold(), diviner.engine_kind());
    println!();

    let info = bm_oracle::DivinationInfo {
        hexagram_number: record.hexagram_number,
        hexagram_name: record.hexagram_name,
        interpretation: record.interpretation,
        formatted_text: record.formatted_text,
        detail: record.detail,
    };
    super::print_info(&info);

    Ok(())
}
