use log::{error, info, LevelFilter};
use rb_collections::RedBlackSet;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::env;
use std::process;

// Usage: rb-collections [KEY | -KEY]...
//
// Arguments are applied in order to a set of keys: `KEY` inserts and `-KEY` removes. The log
// level is read from `RB_LOG` (error, warn, info, debug, trace).
fn main() {
    let level = env::var("RB_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info);
    if TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto).is_err() {
        eprintln!("failed to install logger");
    }

    let mut set = RedBlackSet::new();
    for arg in env::args().skip(1) {
        let (remove, digits) = match arg.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, arg.as_str()),
        };
        let key: u64 = match digits.parse() {
            Ok(key) => key,
            Err(err) => {
                error!("could not parse {:?} as a key: {}", arg, err);
                process::exit(2);
            },
        };

        if remove {
            let removed = set.remove(&key).is_some();
            info!("remove {}: {}", key, if removed { "removed" } else { "absent" });
        } else {
            let inserted = set.insert(key);
            info!("insert {}: {}", key, if inserted { "inserted" } else { "present" });
        }

        if let Err(violation) = set.validate() {
            error!("invariant broken after {:?}: {}", arg, violation);
            process::exit(1);
        }
    }

    let keys: Vec<String> = set.iter().map(|key| key.to_string()).collect();
    println!("keys: [{}]", keys.join(", "));
    println!(
        "len: {}, height: {}, black height: {}",
        set.len(),
        set.height(),
        set.black_height(),
    );
}
