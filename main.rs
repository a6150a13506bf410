use std::{io::Read, path::PathBuf};
use clap::{Parser, Subcommand};

use as2::{Base, Link, Object};


#[derive(Parser)]
/// read, normalize and re-encode activitystreams documents
struct Args {
	#[clap(subcommand)]
	/// command to run
	command: Mode,

	/// path to config file, leave empty to not use any
	#[arg(short, long)]
	config: Option<PathBuf>,

	#[arg(long, default_value_t=false)]
	/// run with debug level tracing
	debug: bool,
}

#[derive(Clone, Subcommand)]
enum Mode {
	/// print current or default configuration
	Config,

	/// print the normalized flat form of a json-ld document
	Compact {
		/// document to read, stdin if not given
		path: Option<PathBuf>,
	},

	/// decode document as a generic Object and print it back
	Object {
		/// document to read, stdin if not given
		path: Option<PathBuf>,
	},

	/// decode document as a Link and print it back
	Link {
		/// document to read, stdin if not given
		path: Option<PathBuf>,
	},
}

fn main() {
	let args = Args::parse();

	tracing_subscriber::fmt()
		.compact()
		.with_writer(std::io::stderr)
		.with_max_level(if args.debug { tracing::Level::DEBUG } else { tracing::Level::INFO })
		.init();

	let config = as2::Config::load(args.config.as_ref());

	if let Err(e) = run(args.command, &config) {
		tracing::error!("{e}");
		std::process::exit(1);
	}
}

fn run(mode: Mode, config: &as2::Config) -> Result<(), String> {
	match mode {
		Mode::Config => {
			let out = toml::to_string_pretty(config)
				.map_err(|e| format!("failed serializing config: {e}"))?;
			println!("{out}");
		},

		Mode::Compact { path } => {
			let obj = as2::jsonld::compact_with(&read_document(path.as_ref())?, &config.reader)
				.map_err(|e| format!("could not normalize document: {e}"))?;
			println!("{}", config.writer.render(&obj));
		},

		Mode::Object { path } => {
			let obj = as2::jsonld::compact_with(&read_document(path.as_ref())?, &config.reader)
				.map_err(|e| format!("could not normalize document: {e}"))?;
			let object = Object::from_json_object(&obj)
				.map_err(|e| format!("invalid object: {e}"))?
				.ok_or("not an object")?;
			println!("{}", object.to_json_with(&config.writer));
		},

		Mode::Link { path } => {
			let obj = as2::jsonld::compact_with(&read_document(path.as_ref())?, &config.reader)
				.map_err(|e| format!("could not normalize document: {e}"))?;
			let link = Link::from_json_object(&obj)
				.map_err(|e| format!("invalid link: {e}"))?
				.ok_or("not a link")?;
			println!("{}", link.to_json_with(&config.writer));
		},
	}

	Ok(())
}

fn read_document(path: Option<&PathBuf>) -> Result<String, String> {
	match path {
		Some(path) => std::fs::read_to_string(path)
			.map_err(|e| format!("failed reading {}: {e}", path.display())),
		None => {
			let mut buf = String::new();
			std::io::stdin()
				.read_to_string(&mut buf)
				.map_err(|e| format!("failed reading stdin: {e}"))?;
			Ok(buf)
		},
	}
}
