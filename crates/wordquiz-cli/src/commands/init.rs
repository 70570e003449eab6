//! The `wordquiz init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("wordquiz.toml"), SAMPLE_CONFIG)?;
    write_if_missing(Path::new("problems.csv"), SAMPLE_VOCABULARY)?;

    println!("\nNext steps:");
    println!("  1. Add your words to problems.csv (columns: word, meaning(KOR))");
    println!("  2. Run: wordquiz validate");
    println!("  3. Run: wordquiz");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# wordquiz configuration

source = "problems.csv"
output_dir = "output"
items_per_quiz = 20
file_stem = "quiz"
title = "영어 단어 퀴즈"
formats = ["html"]
# seed = 42

[columns]
term = "word"
meaning = "meaning(KOR)"
"#;

const SAMPLE_VOCABULARY: &str = "\u{feff}word,meaning(KOR)
apple,사과
book,책
cloud,구름
dream,꿈
early,이른
forest,숲
garden,정원
honest,정직한
island,섬
journey,여행
";
