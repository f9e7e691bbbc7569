//! Interactive assessment form.
//!
//! Prompts for each field in the order of the paper health-check form.
//! A blank line accepts the default shown in brackets.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use shido_classifier::RiskClassifier;
use shido_domain::{AssessmentInput, Gender};

/// Run the interactive form until the user declines another assessment.
pub fn run_interactive(classifier: &RiskClassifier, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info("Specific Health Guidance stratification - Ctrl-D to quit")
    );
    println!(
        "{}",
        formatter.info("Leave clinical values as 0 if within the standard range or unknown.")
    );
    println!();

    let mut editor = DefaultEditor::new()?;

    loop {
        let input = match read_form(&mut editor, formatter) {
            Ok(input) => input,
            Err(e) if is_exit(&e) => break,
            Err(e) => return Err(e),
        };

        match classifier.classify(&input) {
            Ok(result) => {
                println!();
                println!(
                    "{}",
                    formatter.format_result(&input, &result, classifier.criteria())?
                );
            }
            Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
        }
        println!();

        match prompt(&mut editor, "Run another assessment? [y/N]: ") {
            Ok(answer) if parse_yes_no(&answer, false) == Some(true) => continue,
            Ok(_) => break,
            Err(e) if is_exit(&e) => break,
            Err(e) => return Err(e),
        }
    }

    println!("{}", formatter.info("Goodbye!"));
    Ok(())
}

/// Read one complete form.
fn read_form(editor: &mut DefaultEditor, formatter: &Formatter) -> Result<AssessmentInput> {
    println!("{}", formatter.info("1. Basic Information"));
    let gender = prompt_gender(editor, formatter)?;
    let age = prompt_age(editor, formatter)?;
    let waist = prompt_number(editor, formatter, "Waist Circumference (cm)", 0.0)?;
    let bmi = prompt_number(editor, formatter, "BMI", 0.0)?;

    println!("{}", formatter.info("2. Clinical Test Values"));
    let glucose = prompt_number(editor, formatter, "Fasting Plasma Glucose (mg/dl)", 0.0)?;
    let hba1c = prompt_number(editor, formatter, "HbA1c (%)", 0.0)?;
    let triglycerides = prompt_number(editor, formatter, "Triglycerides (mg/dl)", 0.0)?;
    let hdl = prompt_number(editor, formatter, "HDL Cholesterol (mg/dl)", 0.0)?;
    let systolic = prompt_number(editor, formatter, "Systolic BP (mmHg)", 0.0)?;
    let diastolic = prompt_number(editor, formatter, "Diastolic BP (mmHg)", 0.0)?;

    println!("{}", formatter.info("3. Lifestyle Habits"));
    let smoker = prompt_yes_no(editor, formatter, "Do you smoke?")?;

    Ok(AssessmentInput::new(gender, age, waist, bmi)
        .with_fasting_glucose(glucose)
        .with_hba1c(hba1c)
        .with_triglycerides(triglycerides)
        .with_hdl(hdl)
        .with_blood_pressure(systolic, diastolic)
        .with_smoker(smoker))
}

fn prompt(editor: &mut DefaultEditor, label: &str) -> Result<String> {
    let line = editor.readline(label)?;
    Ok(line.trim().to_string())
}

fn prompt_gender(editor: &mut DefaultEditor, formatter: &Formatter) -> Result<Gender> {
    loop {
        let answer = prompt(editor, "Gender (male/female) [male]: ")?;
        if answer.is_empty() {
            return Ok(Gender::Male);
        }
        match Gender::parse(&answer) {
            Some(gender) => return Ok(gender),
            None => eprintln!("{}", formatter.error("Enter male, female, 1 or 2")),
        }
    }
}

fn prompt_age(editor: &mut DefaultEditor, formatter: &Formatter) -> Result<u32> {
    loop {
        let answer = prompt(editor, "Age [40]: ")?;
        match parse_age(&answer) {
            Ok(age) => return Ok(age),
            Err(msg) => eprintln!("{}", formatter.error(&msg)),
        }
    }
}

fn prompt_number(
    editor: &mut DefaultEditor,
    formatter: &Formatter,
    label: &str,
    default: f64,
) -> Result<f64> {
    let text = format!("{} [{}]: ", label, default);
    loop {
        let answer = prompt(editor, &text)?;
        match parse_number(&answer, default) {
            Ok(value) => return Ok(value),
            Err(msg) => eprintln!("{}", formatter.error(&msg)),
        }
    }
}

fn prompt_yes_no(editor: &mut DefaultEditor, formatter: &Formatter, label: &str) -> Result<bool> {
    let text = format!("{} [y/N]: ", label);
    loop {
        let answer = prompt(editor, &text)?;
        match parse_yes_no(&answer, false) {
            Some(value) => return Ok(value),
            None => eprintln!("{}", formatter.error("Enter y or n")),
        }
    }
}

/// Parse a numeric answer; blank means the default.
///
/// Negative values are accepted here and rejected by the classifier.
fn parse_number(answer: &str, default: f64) -> std::result::Result<f64, String> {
    if answer.is_empty() {
        return Ok(default);
    }
    answer
        .parse::<f64>()
        .map_err(|_| format!("'{}' is not a number", answer))
}

fn parse_age(answer: &str) -> std::result::Result<u32, String> {
    if answer.is_empty() {
        return Ok(40);
    }
    answer
        .parse::<u32>()
        .map_err(|_| format!("'{}' is not a whole number of years", answer))
}

fn parse_yes_no(answer: &str, default: bool) -> Option<bool> {
    match answer.to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Ctrl-C and Ctrl-D end the session quietly.
fn is_exit(error: &CliError) -> bool {
    matches!(
        error,
        CliError::Readline(ReadlineError::Interrupted | ReadlineError::Eof)
    )
}
