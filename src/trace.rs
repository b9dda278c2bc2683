use std::io::IsTerminal;

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Plain output on a terminal, JSON lines otherwise. Logs go to stderr so
/// stdout stays clean for piping. `RUST_LOG` overrides the `info` default.
pub fn init() {
	let filter = EnvFilter::from_default_env().add_directive(Level::INFO.into());
	let builder = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr);

	if std::io::stderr().is_terminal() {
		builder.init();
	} else {
		builder.json().flatten_event(true).init();
	}
}
