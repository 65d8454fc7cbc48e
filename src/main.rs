use clap::Parser;
use marks_registry::utils::{logger, validation::Validate};
use marks_registry::{CliConfig, ExamMark, MarksFile, MarksRegistry};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting marks-registry CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 載入成績批次，沒有檔案時使用示例資料
    let marks = match &config.marks_file {
        Some(path) => {
            let file = match MarksFile::from_file(path) {
                Ok(file) => file,
                Err(e) => {
                    tracing::error!("❌ Failed to load marks file: {}", e);
                    eprintln!("❌ {}", e);
                    std::process::exit(1);
                }
            };

            if let Err(e) = file.validate() {
                tracing::error!("❌ Marks file validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }

            if let Some(name) = file.batch_name() {
                tracing::info!("Loaded batch '{}' from {}", name, path);
            }
            file.into_marks()
        }
        None => {
            tracing::warn!("No marks file given, using sample marks");
            sample_marks()
        }
    };

    // 取得共享實例並擷取成績
    let registry = MarksRegistry::instance();
    for mark in &marks {
        registry.capture(mark.clone());
    }
    tracing::info!("Captured {} marks", marks.len());

    // 切換至計算模式後查詢平均
    registry.set_mode(true);

    let students = match &config.student {
        Some(id) => vec![id.clone()],
        None => distinct_students(&marks),
    };

    for student in &students {
        let average = registry.average_for(student);
        println!("{}: {}", student, average);
    }

    tracing::info!("✅ Calculated averages for {} students", students.len());

    Ok(())
}

fn sample_marks() -> Vec<ExamMark> {
    vec![
        ExamMark::new("225041308", "IENT301", 52.0),
        ExamMark::new("224295592", "IRUD301", 75.0),
    ]
}

// 依照首次出現的順序收集不重複的學號
fn distinct_students(marks: &[ExamMark]) -> Vec<String> {
    let mut students: Vec<String> = Vec::new();
    for mark in marks {
        if !students.iter().any(|s| s == mark.student_id()) {
            students.push(mark.student_id().to_string());
        }
    }
    students
}
