//! Types command implementation.

use crate::output::{format_json, format_table_row, print_table_header};
use crate::registry;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let infos = registry::all();

    if json {
        println!("{}", format_json(&infos));
    } else {
        print_table_header();
        for info in &infos {
            println!("{}", format_table_row(info));
        }
    }
    Ok(())
}
