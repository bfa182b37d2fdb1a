//! Servo Studio CLI - validate a saved session and emit the export payload.

use std::path::PathBuf;

use servo_studio::{
    model::SessionLimits,
    session::{self, render_export_payload},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <session.json> [payload-out.json]", args[0]);
        eprintln!();
        eprintln!("Validate a saved servo session and render the export payload");
        eprintln!("consumed by the firmware sketch templates.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  session.json      Path to a saved session file");
        eprintln!("  payload-out.json  Where to write the payload (default: stdout)");
        eprintln!();
        eprintln!("An example session is printed with the --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_session();
        return;
    }

    let session_path = PathBuf::from(&args[1]);

    let set = session::load(&session_path, SessionLimits::default()).unwrap_or_else(|e| {
        eprintln!("Error loading session: {}", e);
        std::process::exit(1);
    });

    println!("Servo Session");
    println!("=============");
    println!(
        "Servos: {} at {}s each ({:?} output)",
        set.len(),
        set.length_seconds(),
        set.output_mode()
    );
    for routine in set.routines() {
        println!(
            "  {:<10} pin {:<3} limits [{}, {}]",
            routine.name(),
            routine.pin(),
            routine.lower_limit(),
            routine.upper_limit()
        );
    }
    if let Some(pin) = set.button_pin() {
        println!("Start button on pin {}", pin);
    }
    println!();

    let payload = render_export_payload(&set).unwrap_or_else(|e| {
        eprintln!("Session is not exportable: {}", e);
        std::process::exit(1);
    });

    let json = serde_json::to_string_pretty(&payload).unwrap_or_else(|e| {
        eprintln!("Error encoding payload: {}", e);
        std::process::exit(1);
    });

    match args.get(2) {
        Some(out) => {
            if let Err(e) = std::fs::write(out, json) {
                eprintln!("Error writing {}: {}", out, e);
                std::process::exit(1);
            }
            println!("Export payload written to {}", out);
        }
        None => println!("{}", json),
    }
}

fn print_example_session() {
    use servo_studio::{model::RoutineSet, session::SessionRecord};

    let mut set = RoutineSet::generate(10, 2, SessionLimits::default())
        .expect("defaults are within limits");
    let _ = set.assign_pin("Servo1", 9);
    let _ = set.assign_pin("Servo2", 10);
    set.set_button_pin(Some(2));

    let record = SessionRecord::from_set(&set);
    println!("Example session (session.json):");
    println!(
        "{}",
        serde_json::to_string_pretty(&record).expect("record always serializes")
    );
}
