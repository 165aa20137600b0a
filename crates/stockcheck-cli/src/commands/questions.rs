//! The `stockcheck questions` command.

use anyhow::Result;

use stockcheck_core::model::Category;

pub fn execute() -> Result<()> {
    for category in Category::ALL {
        println!("{category}");
        for question in category.questions() {
            println!("  {:<3} {:<22} {}", question.alias, question.id, question.text);
        }
        println!();
    }

    println!("Answer \"yes\" with: stockcheck diagnose --name <NAME> --check g1,f2,...");
    Ok(())
}
