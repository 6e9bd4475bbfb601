// Allow dead code for features exported but not yet used by the CLI
#![allow(dead_code)]

use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Result;

mod cli;
mod conversion;
mod error;
mod formatter;
mod parser;
mod transform;

use crate::cli::{infer_direction, Args, Direction};
use crate::conversion::{ConversionConfig, ConversionEngine, ConvertedDocument};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.conversion_config();

    if args.validate_only {
        handle_validation(&args)
    } else if args.format_only {
        handle_formatting(&args)
    } else {
        handle_conversion(&args, &config)
    }
}

fn handle_conversion(args: &Args, config: &ConversionConfig) -> Result<()> {
    if let Some(input) = &args.input {
        let path = PathBuf::from(input);
        if path.is_dir() {
            return convert_directory(&path, args, config);
        }
    }

    let (content, path) = read_input(args)?;
    let direction = args
        .direction
        .unwrap_or_else(|| infer_direction(path.as_deref(), &content));

    convert_text(&content, direction, args, config)
}

fn convert_text(
    content: &str,
    direction: Direction,
    args: &Args,
    config: &ConversionConfig,
) -> Result<()> {
    let engine = ConversionEngine::new(config.clone());
    let document = match direction {
        Direction::JsonToXml => engine.convert_json_text(content),
        Direction::XmlToJson => engine.convert_xml(content),
    }
    .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    write_output(args, &document.content)?;

    if args.stats {
        output_statistics(&document, args.quiet);
    }

    Ok(())
}

fn convert_directory(input_dir: &Path, args: &Args, config: &ConversionConfig) -> Result<()> {
    let direction = args.direction.ok_or_else(|| {
        anyhow::anyhow!("--direction is required when converting a directory")
    })?;
    let output_dir = args
        .output
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("Output directory required for directory conversion"))?;

    std::fs::create_dir_all(output_dir)?;

    let files =
        crate::parser::directory::find_files(input_dir, direction.input_extension(), args.recursive)
            .map_err(|e| anyhow::anyhow!("Failed scanning input directory: {}", e))?;

    if files.is_empty() {
        if !args.quiet {
            println!(
                "No .{} files found in {}",
                direction.input_extension(),
                input_dir.display()
            );
        }
        return Ok(());
    }

    if !args.quiet {
        println!("Found {} .{} files", files.len(), direction.input_extension());
    }

    for file in files {
        let relative = file.strip_prefix(input_dir).unwrap_or(&file).to_path_buf();
        let output_file = crate::cli::path_mapping::map_input_to_output(
            input_dir,
            &file,
            output_dir,
            direction.output_extension(),
        );

        if let Some(parent) = output_file.parent() {
            std::fs::create_dir_all(parent)?;
        }

        match convert_single_file(&file, &output_file, direction, config) {
            Ok(_) => {
                if !args.quiet {
                    println!("✓ {} -> {}", relative.display(), output_file.display());
                }
            }
            Err(e) => {
                eprintln!("✗ Error converting {}: {}", relative.display(), e);
                if !args.continue_on_error {
                    return Err(anyhow::anyhow!("Aborting due to conversion error: {}", e));
                }
            }
        }
    }

    Ok(())
}

fn convert_single_file(
    input_path: &Path,
    output_path: &Path,
    direction: Direction,
    config: &ConversionConfig,
) -> Result<()> {
    let content = std::fs::read_to_string(input_path)?;

    let engine = ConversionEngine::new(config.clone());
    let document = match direction {
        Direction::JsonToXml => engine.convert_json_text(&content),
        Direction::XmlToJson => engine.convert_xml(&content),
    }
    .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    std::fs::write(output_path, &document.content)?;

    Ok(())
}

fn handle_validation(args: &Args) -> Result<()> {
    if let Some(input) = &args.input {
        let path = PathBuf::from(input);
        if path.is_dir() {
            return validate_directory(&path, args);
        }
    }

    let (content, path) = read_input(args)?;
    let direction = args
        .direction
        .unwrap_or_else(|| infer_direction(path.as_deref(), &content));

    validate_content(&content, direction)?;
    if !args.quiet {
        match direction {
            Direction::JsonToXml => println!("✓ Valid JSON"),
            Direction::XmlToJson => println!("✓ Valid XML"),
        }
    }
    Ok(())
}

fn validate_content(content: &str, direction: Direction) -> Result<()> {
    match direction {
        Direction::JsonToXml => {
            crate::parser::parse_json(content).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        }
        Direction::XmlToJson => {
            crate::conversion::xml_to_json(content).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        }
    }
    Ok(())
}

fn validate_directory(dir: &Path, args: &Args) -> Result<()> {
    let direction = args.direction.ok_or_else(|| {
        anyhow::anyhow!("--direction is required when validating a directory")
    })?;

    let files =
        crate::parser::directory::find_files(dir, direction.input_extension(), args.recursive)?;

    for file in files {
        let relative = file.strip_prefix(dir).unwrap_or(&file);

        match std::fs::read_to_string(&file) {
            Ok(content) => match validate_content(&content, direction) {
                Ok(_) => println!("✓ {}", relative.display()),
                Err(e) => eprintln!("✗ {}: {}", relative.display(), e),
            },
            Err(e) => eprintln!("✗ {}: {}", relative.display(), e),
        }
    }

    Ok(())
}

fn handle_formatting(args: &Args) -> Result<()> {
    let (content, path) = read_input(args)?;
    let direction = args
        .direction
        .unwrap_or_else(|| infer_direction(path.as_deref(), &content));

    let formatted = match direction {
        Direction::JsonToXml => crate::formatter::format_json(&content)
            .map_err(|e| anyhow::anyhow!(e.to_string()))?,
        Direction::XmlToJson => crate::formatter::format_xml(&content),
    };

    write_output(args, &formatted)
}

/// Resolve the input to document text, remembering the file path when the
/// input named one so the conversion direction can be inferred from it.
fn read_input(args: &Args) -> Result<(String, Option<PathBuf>)> {
    if args.stdin {
        return Ok((read_stdin()?, None));
    }

    let input = args.input.as_ref().ok_or_else(|| {
        anyhow::anyhow!("No input provided. Use --stdin or provide an input path")
    })?;

    // Raw document text on the command line
    let trimmed = input.trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') || trimmed.starts_with('<') {
        return Ok((input.clone(), None));
    }

    let path = PathBuf::from(input);
    if path.is_file() {
        let content = std::fs::read_to_string(&path)?;
        Ok((content, Some(path)))
    } else {
        Err(anyhow::anyhow!("Input path does not exist: {}", input))
    }
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer.trim().to_string())
}

fn write_output(args: &Args, content: &str) -> Result<()> {
    if let Some(output_path) = &args.output {
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_path, content)?;

        if !args.quiet {
            println!("✓ Converted to: {}", output_path.display());
        }
    } else {
        println!("{}", content);
    }

    Ok(())
}

fn output_statistics(document: &ConvertedDocument, quiet: bool) {
    if quiet {
        return;
    }

    println!("\nConversion Statistics:");
    println!("Input size: {} bytes", document.metadata.input_size);
    println!("Output size: {} bytes", document.metadata.output_size);
    println!(
        "Processing time: {}ms",
        document.metadata.processing_time_ms
    );
}
