pub fn run(opts: &super::Options, number: u8) -> Result<(), String> {
    let diviner = super::open(opts)?;
    let info = diviner.hexagram_details(number).map_err(|e| {
        if e.is_invalid_input() {
            e.to_string()
        } else {
            format!("catalog unavailable: {e}")
        }
    })?;

    if opts.json {
        return super::print_json(&info);
    }

    super::print_info(&info);

    let extra = info
        .detail
        .as_ref()
        .map(|d| d.interpretations.as_slice())
        .unwrap_or_default();
    if extra.len() > 1 {
        println!();
        for passage in extra {
            println!("  - {passage}");
        }
    }

    Ok(())
}
