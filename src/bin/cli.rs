//! This is the command line tool that either renders text into a glyph image
//! or reads the text back from one.

extern crate clap;
extern crate env_logger;
extern crate log;

use clap::{value_parser, Arg, ArgAction, Command};
use hexglyph::canvas::Canvas;
use hexglyph::charset::Charset;
use hexglyph::decoder::Decoded;
use hexglyph::encoder::GlyphEncoder;
use hexglyph::error::Result;
use hexglyph::{decode_image, decode_file, encode_text, Context};

use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use std::{fs, io::Write};

const IMAGE_EXTENSION: &str = ".png";

/// A scoped utility struct for measuring and reporting time.
struct Timer {
    start: std::time::Instant,
}

impl Timer {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let now = Instant::now();
        if let Some(duration) = now.checked_duration_since(self.start) {
            log::info!(
                "Operation completed in {:03} seconds",
                duration.as_secs_f32()
            );
        }
    }
}

fn report(decoded: &Decoded) {
    log::info!(
        "Read {} cells into {} bytes.",
        decoded.cells,
        decoded.bytes.len()
    );
    if !decoded.is_clean() {
        log::info!(
            "Best-effort decode: truncated={} skipped={}",
            decoded.truncated,
            decoded.skipped
        );
    }
}

/// Render 'text' into 'out'. In checked mode, read the image back and compare
/// the text and the number of cells.
fn handle_encode(
    text: &str,
    encoding: &str,
    ctx: Context,
    out: &str,
    checked: bool,
) -> Result<bool> {
    let canvas = encode_text(text, encoding, ctx)?;
    canvas.save(Path::new(out))?;
    log::info!(
        "Wrote {} ({}x{} pixels).",
        out,
        canvas.width(),
        canvas.height()
    );

    if !checked {
        return Ok(true);
    }

    let reloaded = Canvas::load(Path::new(out))?;
    let decoded = decode_image(&reloaded, encoding, ctx)?;
    report(&decoded);

    let bytes = Charset::for_label(encoding)?.encode(text)?;
    let expected_cells = GlyphEncoder::new(&bytes, ctx).cell_count();
    let cell = ctx.cell_size();
    let actual_cells = (reloaded.width() / cell) * (reloaded.height() / cell);
    log::info!(
        "Expected {} cells, found {}.",
        expected_cells,
        actual_cells
    );

    if decoded.text == text && expected_cells as u32 == actual_cells {
        log::info!("Correct!");
        Ok(true)
    } else {
        log::info!("Incorrect!");
        log::info!("Original: {}", text);
        log::info!("Restored: {}", decoded.text);
        Ok(false)
    }
}

fn handle_decode(
    input_path: &str,
    encoding: &str,
    ctx: Context,
    out: Option<&String>,
) -> Result<bool> {
    let decoded = decode_file(Path::new(input_path), encoding, ctx)?;
    report(&decoded);

    match out {
        Some(path) => {
            fs::write(path, decoded.text.as_bytes())?;
            log::info!("Wrote {}.", path);
        }
        None => {
            let mut stdout = std::io::stdout();
            writeln!(stdout, "{}", decoded.text)?;
        }
    }
    Ok(true)
}

fn main() -> ExitCode {
    let matches = Command::new("CLI")
        .version("1.x")
        .arg(
            Arg::new("checked")
                .long("check")
                .help("Read the image back after encoding and verify it")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("decode")
                .short('d')
                .long("decode")
                .help("Read the text from the input image")
                .action(ArgAction::SetTrue)
                .conflicts_with("encode"),
        )
        .arg(
            Arg::new("encode")
                .short('e')
                .long("encode")
                .help("Render the input text into an image")
                .conflicts_with("decode")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Path of the output file")
                .num_args(1),
        )
        .arg(
            Arg::new("encoding")
                .long("encoding")
                .value_name("NAME")
                .help("The byte encoding of the text (utf-8, koi8-u, ...)")
                .default_value("utf-8")
                .num_args(1),
        )
        .arg(
            Arg::new("cell-size")
                .long("cell-size")
                .value_name("PIXELS")
                .help("The size of each cell")
                .value_parser(value_parser!(u32))
                .default_value("20")
                .num_args(1),
        )
        .arg(
            Arg::new("line-width")
                .long("line-width")
                .value_name("PIXELS")
                .help("The width of the drawn segments")
                .value_parser(value_parser!(u32))
                .default_value("2")
                .num_args(1),
        )
        .arg(
            Arg::new("INPUT")
                .help("The text to encode, or the image to decode")
                .required(true)
                .index(1),
        )
        .get_matches();

    env_logger::builder().format_timestamp(None).init();

    let mut cli_encode = matches.get_flag("encode");
    let cli_decode = matches.get_flag("decode");
    let cli_checked_mode = matches.get_flag("checked");
    let cli_output_path = matches.get_one::<String>("output");
    let encoding = matches
        .get_one::<String>("encoding")
        .cloned()
        .unwrap_or_else(|| String::from("utf-8"));
    let cell_size = *matches.get_one::<u32>("cell-size").unwrap_or(&20);
    let line_width = *matches.get_one::<u32>("line-width").unwrap_or(&2);
    let input = match matches.get_one::<String>("INPUT") {
        Some(input) => input.clone(),
        None => return ExitCode::FAILURE,
    };

    // The user did not say which way to go. Images are decoded, anything
    // else is treated as text.
    if !cli_encode && !cli_decode && !input.ends_with(IMAGE_EXTENSION) {
        cli_encode = true;
    }

    // Reading only needs the cell size.
    let ctx = if cli_encode {
        Context::new(cell_size, line_width)
    } else {
        Context::for_decoding(cell_size)
    };
    let ctx = match ctx {
        Ok(ctx) => ctx,
        Err(err) => {
            log::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let x = Timer::new();
    let status = if cli_encode {
        // Come up with a file name.
        let out = cli_output_path
            .cloned()
            .unwrap_or_else(|| format!("output_{}{}", encoding, IMAGE_EXTENSION));
        log::info!("Encoding {} bytes of text as {}", input.len(), encoding);
        handle_encode(&input, &encoding, ctx, &out, cli_checked_mode)
    } else {
        log::info!("Decoding {} as {}", input, encoding);
        handle_decode(&input, &encoding, ctx, cli_output_path)
    };
    drop(x);

    match status {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
