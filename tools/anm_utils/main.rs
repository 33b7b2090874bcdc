//! ANM cinematic utility.
//!
//! Provides three subcommands:
//! - `export`: decode a `.ANM` container and write its frames as indexed
//!   TGA images, either every frame (`--full`) or only the frames that
//!   carry an image chunk.
//! - `dump`: write a text dump of every chunk for format archaeology.
//! - `import`: re-encode edited TGA images listed in an import file back
//!   into the container and save a new `.ANM`.

use std::{
	fmt::Write as _,
	fs,
	path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use log::warn;
use ravenloft_rs::prelude::*;
use ravenloft_rs::file::tga;

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Command::Export(opts) => run_export(&opts),
		Command::Dump(opts) => run_dump(&opts),
		Command::Import(opts) => run_import(&opts),
	}
}

#[derive(Parser)]
#[command(name = "anm_utils")]
#[command(author = "ravenloft-rs project")]
#[command(version)]
#[command(about = "Decode, dump, and re-import cinematic (.ANM) files", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Export frames of a .ANM file as TGA images
	Export(ExportArgs),
	/// Dump the chunk structure of a .ANM file as text
	Dump(DumpArgs),
	/// Import TGA images listed in an import file into a .ANM file
	Import(ImportArgs),
}

#[derive(Args)]
struct ExportArgs {
	/// Path to the .ANM file
	#[arg(value_name = "FILE")]
	file: PathBuf,

	/// Export every frame as a complete picture instead of only the
	/// frames that carry an image chunk
	#[arg(short, long, default_value_t = false)]
	full: bool,

	/// Directory to write the TGA files into
	#[arg(short, long, value_name = "DIR", default_value = ".")]
	out_dir: PathBuf,
}

#[derive(Args)]
struct DumpArgs {
	/// Path to the .ANM file
	#[arg(value_name = "FILE")]
	file: PathBuf,
}

#[derive(Args)]
struct ImportArgs {
	/// Path to the .ANM file
	#[arg(value_name = "FILE")]
	file: PathBuf,

	/// Text file listing one TGA file name per line, pattern
	/// `<prefix>_<frame>_<chunk>.<ext>`
	#[arg(short, long, value_name = "LIST", default_value = "IMPORT.TXT")]
	list: PathBuf,

	/// Output path; defaults to `<NAME>_NEW.ANM` next to the input
	#[arg(short, long, value_name = "OUT")]
	output: Option<PathBuf>,
}

/// Uppercased file stem used to name exported artifacts.
fn output_stem(path: &Path) -> Result<String> {
	let stem = path
		.file_stem()
		.and_then(|s| s.to_str())
		.with_context(|| format!("invalid file name: {}", path.display()))?;
	Ok(stem.to_uppercase())
}

fn load(path: &Path) -> Result<AnmFile> {
	let anm =
		AnmFile::open(path).with_context(|| format!("failed to load {}", path.display()))?;
	if anm.frames().is_empty() {
		bail!("no frames parsed from {}", path.display());
	}
	Ok(anm)
}

fn run_export(opts: &ExportArgs) -> Result<()> {
	let anm = load(&opts.file)?;
	let stem = output_stem(&opts.file)?;
	fs::create_dir_all(&opts.out_dir)?;

	let mut tracker = ReferenceTracker::new();
	let mut written = 0usize;

	for (frame_index, frame) in anm.frames().iter().enumerate() {
		if opts.full {
			for chunk in frame.chunks() {
				tracker.observe(chunk);
			}

			let path = opts.out_dir.join(format!("{stem}_{frame_index:04}.TGA"));
			let image = tga::write_indexed(tracker.palette(), tracker.image());
			match fs::write(&path, image) {
				Ok(()) => written += 1,
				Err(err) => warn!("skipping {}: {err}", path.display()),
			}
		} else {
			for (chunk_index, chunk) in frame.chunks().iter().enumerate() {
				tracker.observe(chunk);
				if !chunk.is_image() || chunk.declared_size() <= 2 {
					continue;
				}

				let path = opts
					.out_dir
					.join(format!("{stem}_{frame_index:04}_{chunk_index:04}.TGA"));
				let Some(pixels) = chunk.pixels() else {
					continue;
				};
				let image = tga::write_indexed(tracker.palette(), pixels);
				match fs::write(&path, image) {
					Ok(()) => written += 1,
					Err(err) => warn!("skipping {}: {err}", path.display()),
				}
			}
		}
	}

	println!("{written} TGA files written to {}", opts.out_dir.display());
	Ok(())
}

fn run_dump(opts: &DumpArgs) -> Result<()> {
	let anm = load(&opts.file)?;
	let stem = output_stem(&opts.file)?;

	let mut text = String::new();
	for (frame_index, frame) in anm.frames().iter().enumerate() {
		writeln!(text, "Frame: {frame_index:04}")?;

		for (chunk_index, chunk) in frame.chunks().iter().enumerate() {
			writeln!(text, "Chunk:      {chunk_index:02}   {chunk}")?;

			if chunk.is_image() {
				writeln!(text, "Image Size: {}", chunk.declared_size())?;
			}

			match chunk.command_params() {
				Some(CommandParams::Repeat {
					count,
					offset,
				}) => {
					writeln!(text, "Count:      {count}")?;
					writeln!(text, "Offset:     {offset}")?;
				}
				Some(CommandParams::Pair {
					first,
					second,
				}) => {
					writeln!(text, "Param 1:    {first}[{first:03X}]")?;
					writeln!(text, "Param 2:    {second}[{second:03X}]")?;
				}
				Some(CommandParams::Single {
					value,
				}) => {
					writeln!(text, "Param 1:    {value}[{value:03X}]")?;
				}
				Some(CommandParams::Subtitle {
					text_line,
					palette,
				}) => {
					writeln!(text, "Text Line:  {text_line:03}/[{text_line:03X}]")?;
					writeln!(text, "Palette:    {palette:03}/[{palette:03X}]")?;
				}
				None => {}
			}
		}

		writeln!(text)?;
	}

	let path = format!("{stem}.TXT");
	fs::write(&path, text).with_context(|| format!("failed to write {path}"))?;
	println!("dump written to {path}");
	Ok(())
}

fn run_import(opts: &ImportArgs) -> Result<()> {
	let mut anm = load(&opts.file)?;
	let stem = output_stem(&opts.file)?;

	let list = fs::read_to_string(&opts.list)
		.with_context(|| format!("failed to read import list {}", opts.list.display()))?;

	let mut entries = Vec::new();
	for line in list.lines().map(str::trim).filter(|line| !line.is_empty()) {
		match ImportEntry::from_path(line) {
			Some(entry) => entries.push(entry),
			None => warn!("ignoring malformed import entry: {line}"),
		}
	}
	if entries.is_empty() {
		bail!("no valid entries in {}", opts.list.display());
	}

	let substituted = import_files(&mut anm, &entries);

	let output = opts
		.output
		.clone()
		.unwrap_or_else(|| opts.file.with_file_name(format!("{stem}_NEW.ANM")));
	anm.save(&output).with_context(|| format!("failed to write {}", output.display()))?;

	println!("{substituted}/{} images imported into {}", entries.len(), output.display());
	Ok(())
}
