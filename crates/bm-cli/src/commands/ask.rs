/// `usage` names the invoking command in the error for a blank query.
pub fn run(opts: &super::Options, query: &str, usage: &str) -> Result<(), String> {
    if query.trim().is_empty() {
        return Err(format!("usage: {usage} <question>"));
    }

    let mut diviner = super::open(opts)?;
    let (augmented, info) = diviner.divine_query_augmentation(query);

    if opts.json {
        return super::print_json(&serde_json::json!({
            "augmented_text": augmented,
            "info": info,
        }));
    }

    println!("{augmented}");
    Ok(())
}
