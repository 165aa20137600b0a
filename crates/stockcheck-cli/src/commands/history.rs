//! The `stockcheck history` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use stockcheck_core::config::OutputFormat;
use stockcheck_core::record::DiagnosisRecord;
use stockcheck_core::store::LogState;

use super::Settings;

pub fn execute(settings: &Settings, format: Option<&str>) -> Result<()> {
    let format = settings.format(format)?;

    let records = match settings.store.read()? {
        LogState::Absent => {
            println!(
                "No diagnosis history yet ({}). Run `stockcheck diagnose` first.",
                settings.store.path().display()
            );
            return Ok(());
        }
        LogState::Present(records) => records,
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Text => {
            println!("{}", history_table(&records));
            println!(
                "{} record(s) in {}",
                records.len(),
                settings.store.path().display()
            );
        }
    }

    Ok(())
}

fn history_table(records: &[DiagnosisRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "진단일",
        "종목명",
        "현재가",
        "점수",
        "등급",
        "상세_성장성",
        "상세_실적",
        "상세_수급",
        "상세_차트",
    ]);

    for r in records {
        table.add_row(vec![
            Cell::new(r.diagnosis_date.format("%Y-%m-%d")),
            Cell::new(&r.stock_name),
            Cell::new(r.current_price),
            Cell::new(r.score),
            Cell::new(r.grade),
            Cell::new(r.subtotal_growth),
            Cell::new(r.subtotal_fundamental),
            Cell::new(r.subtotal_money),
            Cell::new(r.subtotal_chart),
        ]);
    }

    table
}
