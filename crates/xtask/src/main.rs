//! Workspace maintenance tasks: `cargo run -p xtask -- <task>`.
use std::env;
use std::process::Command;

/// A named cargo invocation.
struct Task {
    name: &'static str,
    about: &'static str,
    cargo: &'static [&'static str],
}

const TASKS: &[Task] = &[
    Task {
        name: "fmt",
        about: "check formatting",
        cargo: &["fmt", "--all", "--", "--check"],
    },
    Task {
        name: "clippy",
        about: "lint every target, warnings are errors",
        cargo: &[
            "clippy",
            "--workspace",
            "--all-targets",
            "--",
            "-D",
            "warnings",
        ],
    },
    Task {
        name: "test",
        about: "run unit and integration tests",
        cargo: &["test", "--workspace"],
    },
    Task {
        name: "staticlib",
        about: "build the archive native extensions link against",
        cargo: &["build", "-p", "ob_bool", "--release", "--lib"],
    },
    Task {
        name: "miri",
        about: "run the raw-pointer crates under miri (nightly)",
        cargo: &[
            "+nightly", "miri", "test", "-p", "ob_core", "-p", "ob_bool",
        ],
    },
];

/// Run in order by `verify`, the default task.
const VERIFY: &[&str] = &["fmt", "clippy", "test", "staticlib"];

fn main() {
    let name = env::args().nth(1).unwrap_or_else(|| "verify".to_string());
    if let Err(msg) = run(&name) {
        eprintln!("{msg}");
        std::process::exit(1);
    }
}

fn run(name: &str) -> Result<(), String> {
    if name == "verify" {
        return VERIFY.iter().try_for_each(|step| run(step));
    }
    match find(name) {
        Some(task) => cargo(task.cargo),
        None => Err(usage(name)),
    }
}

fn find(name: &str) -> Option<&'static Task> {
    TASKS.iter().find(|task| task.name == name)
}

fn usage(unknown: &str) -> String {
    let mut out = format!("Unknown task: {unknown}\nUsage: cargo run -p xtask -- <task>\n");
    out.push_str("  verify     fmt, clippy, test, staticlib\n");
    for task in TASKS {
        out.push_str(&format!("  {:<10} {}\n", task.name, task.about));
    }
    out
}

/// Runs cargo with inherited stdio so its progress stays visible.
fn cargo(args: &[&str]) -> Result<(), String> {
    let line = format!("cargo {}", args.join(" "));
    eprintln!("$ {line}");
    let status = Command::new("cargo")
        .args(args)
        .status()
        .map_err(|e| format!("Failed to run cargo: {e}"))?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("`{line}` failed with {status}"))
    }
}
