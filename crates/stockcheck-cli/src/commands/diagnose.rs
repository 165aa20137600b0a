//! The `stockcheck diagnose` command.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use comfy_table::{Cell, Color, Table};
use serde_json::json;

use stockcheck_core::config::OutputFormat;
use stockcheck_core::diagnose::{today, Diagnoser, Diagnosis};
use stockcheck_core::model::{Category, Grade};
use stockcheck_core::{AnswerSet, CHECKLIST};

use super::{parse_yes_no, prompt_line, Settings};

pub fn execute(
    settings: &Settings,
    name: Option<String>,
    price: u64,
    checks: &[String],
    interactive: bool,
    format: Option<&str>,
) -> Result<()> {
    let format = settings.format(format)?;
    let mut answers = AnswerSet::from_yes_ids(checks)?;

    let name = if interactive {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut prompts = io::stderr();
        let name = match name {
            Some(n) => n,
            None => prompt_line(&mut input, &mut prompts, "종목명: ")?.unwrap_or_default(),
        };
        answers = ask_questions(&mut input, &mut prompts, answers)?;
        name
    } else {
        name.unwrap_or_default()
    };

    let diagnoser = Diagnoser::new(settings.store.clone());
    let diagnosis = diagnoser
        .submit(&name, price, &answers, today())
        .context("diagnosis not saved")?;

    match format {
        OutputFormat::Json => {
            let path = settings.store.path().display().to_string();
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "record": diagnosis.record,
                    "yes_count": diagnosis.assessment.yes_count,
                    "grade_name": diagnosis.assessment.grade.english(),
                    "verdict": diagnosis.assessment.grade.verdict(),
                    "log_file": path,
                }))?
            );
        }
        OutputFormat::Text => print_result(&diagnosis, settings),
    }

    Ok(())
}

/// Walk the checklist, asking y/n for each question. An empty or
/// unrecognised answer keeps the current value. Input that ends before the
/// last question is an error, so a partial diagnosis is never saved.
fn ask_questions<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    mut answers: AnswerSet,
) -> Result<AnswerSet> {
    let mut asked = 0;
    for category in Category::ALL {
        writeln!(out, "\n{category}")?;
        for question in category.questions() {
            let current = answers.is_yes(question.id).unwrap_or(false);
            let hint = if current { "Y/n" } else { "y/N" };
            let prompt = format!("  [{}] {} ({hint}): ", question.alias, question.text);

            let Some(reply) = prompt_line(input, out, &prompt)? else {
                writeln!(out)?;
                bail!(
                    "input ended after {asked} of {} questions",
                    CHECKLIST.len()
                );
            };
            asked += 1;
            if let Some(yes) = parse_yes_no(&reply) {
                answers = answers.with(question.id, yes)?;
            }
        }
    }
    Ok(answers)
}

fn grade_color(grade: Grade) -> Color {
    match grade {
        Grade::StrongBuy => Color::Green,
        Grade::ConsiderBuy => Color::Blue,
        Grade::Watch => Color::DarkYellow,
        Grade::Risk => Color::Red,
    }
}

fn print_result(diagnosis: &Diagnosis, settings: &Settings) {
    let record = &diagnosis.record;
    let assessment = &diagnosis.assessment;

    println!("[{}] 진단 완료!", record.stock_name);
    println!();

    let mut summary = Table::new();
    summary.set_header(vec!["총점", "등급", "체크 항목"]);
    summary.add_row(vec![
        Cell::new(format!("{}점", assessment.score)),
        Cell::new(format!("{} ({})", assessment.grade, assessment.grade.english()))
            .fg(grade_color(assessment.grade)),
        Cell::new(format!("{} / 12", assessment.yes_count)),
    ]);
    println!("{summary}");

    let mut detail = Table::new();
    detail.set_header(vec!["Category", "Yes"]);
    for category in Category::ALL {
        detail.add_row(vec![
            Cell::new(category.to_string()),
            Cell::new(format!("{}/3", assessment.subtotals.get(category))),
        ]);
    }
    println!("{detail}");

    println!();
    println!("한마디: {}", assessment.grade.verdict());
    println!();
    println!(
        "'{}' 파일에 저장되었습니다.",
        settings.store.path().display()
    );
}
