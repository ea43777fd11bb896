//! Run the standard pipeline over a piece of text and print every finding.
//!
//! ```bash
//! cargo run --example annotate
//! ```

use yfirles_core::Corrector;

fn main() -> yfirles_core::Result<()> {
    let text = "Atvinuleysi jógst um 3%. Ég kláraði verkefnið þrátt fyrir að ég var þreittur.";
    let corrector = Corrector::new()?;

    for (n, sentence) in corrector.correct(text)?.enumerate() {
        println!("setning {}", n + 1);
        println!("  upprunaleg: {}", sentence.original());
        println!("  leiðrétt:   {}", sentence.corrected());
        for ann in sentence.annotations() {
            println!(
                "  [{}] tókar {}..{}: {}",
                ann.code, ann.start, ann.end, ann.text
            );
            if let Some(suggest) = &ann.suggest {
                println!("        tillaga: {suggest}");
            }
        }
    }
    Ok(())
}
