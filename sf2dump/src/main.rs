//! sf2dump - prints the contents of a SoundFont2 file.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use soundfont2::{LoaderSettings, SoundFont, SoundFontInfo};

#[derive(Parser)]
#[command(name = "sf2dump")]
#[command(version, about = "Print the metadata, presets and key mappings of a SoundFont2 file", long_about = None)]
struct Cli {
    /// SoundFont file to load
    path: PathBuf,

    /// Fail on zones that refer to missing samples or instruments
    #[arg(long)]
    strict: bool,

    /// MIDI key to look up (0-127)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=127))]
    key: Option<u8>,

    /// Bank of the preset used for the key lookup
    #[arg(short, long, default_value = "0")]
    bank: u16,

    /// Program of the preset used for the key lookup
    #[arg(short, long, default_value = "0")]
    preset: u16,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    let data = fs::read(&cli.path)
        .with_context(|| format!("failed to read {}", cli.path.display()))?;

    let settings = LoaderSettings {
        strict_references: cli.strict,
    };
    let sound_font = SoundFont::with_settings(&data, &settings)
        .with_context(|| format!("failed to load {}", cli.path.display()))?;

    print_info(sound_font.info());
    print_presets(&sound_font);

    if let Some(key) = cli.key {
        print_key(&sound_font, key, cli.bank, cli.preset);
    }

    Ok(())
}

fn print_info(info: &SoundFontInfo) {
    println!("{} (SoundFont {})", info.name, info.version);
    println!("  engine:      {}", info.sound_engine);
    let optional = [
        ("rom", &info.rom),
        ("created", &info.creation_date),
        ("author", &info.author),
        ("product", &info.product),
        ("copyright", &info.copyright),
        ("comments", &info.comments),
        ("created by", &info.created_by),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            println!("  {:<12} {}", format!("{}:", label), value);
        }
    }
    if let Some(rom_version) = &info.rom_version {
        println!("  rom version: {}", rom_version);
    }
}

fn print_presets(sound_font: &SoundFont) {
    println!(
        "\n{} samples, {} instruments, {} presets",
        sound_font.samples().len(),
        sound_font.instruments().len(),
        sound_font.presets().len()
    );

    for (bank_number, bank) in sound_font.banks() {
        println!("\nbank {}", bank_number);
        for (program, preset) in bank.presets() {
            let instruments: Vec<&str> = preset
                .zones()
                .iter()
                .map(|zone| zone.instrument().name())
                .collect();
            println!(
                "  {:>3} {:<20} [{}]",
                program,
                preset.name(),
                instruments.join(", ")
            );
        }
    }
}

fn print_key(sound_font: &SoundFont, key: u8, bank: u16, program: u16) {
    println!();
    let Some(data) = sound_font.key_data(key, bank, program) else {
        println!("key {} is not mapped by preset {}:{}", key, bank, program);
        return;
    };

    println!(
        "key {} -> preset '{}', instrument '{}', sample '{}' ({} frames at {} hz)",
        data.key_number,
        data.preset.name(),
        data.instrument.name(),
        data.sample.name(),
        data.sample.data().len(),
        data.sample.sample_rate()
    );

    let mut generators: Vec<_> = data.generators.values().collect();
    generators.sort_by_key(|generator| generator.id);
    for generator in generators {
        match (generator.value(), generator.range()) {
            (Some(value), _) => println!("  {:?} = {}", generator.id, value),
            (_, Some(range)) => println!("  {:?} = {}..={}", generator.id, range.lo, range.hi),
            _ => {}
        }
    }

    for modulator in data.modulators.values() {
        println!(
            "  modulator -> {:?}: source {:#06x}, amount {}",
            modulator.destination, modulator.source.raw, modulator.amount
        );
    }
}
