use bm_core::{Catalog, LinePattern, Trigram};
use comfy_table::{ContentArrangement, Table};

pub fn run(opts: &super::Options, name: Option<&str>) -> Result<(), String> {
    let catalog = Catalog::load().map_err(|e| e.to_string())?;

    let selected: Vec<Trigram> = match name {
        Some(name) => {
            let t = Trigram::parse(name).ok_or_else(|| format!("unknown trigram '{name}'"))?;
            vec![t]
        }
        None => catalog.trigrams().to_vec(),
    };

    if opts.json {
        return super::print_json(&selected);
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Symbol", "Name", "Chinese", "Lines", "Attribute", "Doubled"]);

    for &t in &selected {
        let doubled = catalog.resolve(LinePattern::from_trigrams(t, t));
        table.add_row(vec![
            t.symbol().to_string(),
            t.name().to_string(),
            t.chinese_name().to_string(),
            format!("{:03b}", t.bits()),
            t.attribute().to_string(),
            format!("{} {}", doubled.number, doubled.name),
        ]);
    }

    println!("{table}");
    println!();
    if name.is_none() {
        println!("  {} trigrams", selected.len());
    }

    Ok(())
}
