#![doc = r#"
payops — CSV-driven bulk operations against a payment platform's REST APIs.

Operations teams hand this tool a CSV file and a command; it walks the file
record by record and issues the corresponding platform calls: linking stores
to split configurations, closing account holders, adding payment methods,
reassigning terminals, toggling SIM cards, disabling offline payments,
scheduling app installs, pointing sweeps at transfer instruments, and setting
sales-day close times.

A failing record never stops the batch. Every failure is collected with the
record's identity and the run ends with a combined error that lists each one,
so a partially-bad file can be fixed and re-run.

Configuration comes from `PLATFORM_*` environment variables (a URL/key pair
per service, for both the test and live environment); `--prod` selects live
and `--dry-run` performs every read and validation without writing anything.

Embedding
---------
The command processors are generic over the [`api::Api`] trait, so they can
be driven programmatically with any implementation:

```rust,no_run
use payops::api::Client;
use payops::commands::sweep;
use payops::config::{Config, Environment};

fn main() -> payops::Result<()> {
    let config = Config::from_env()?;
    let endpoints = config.resolve(Environment::Test);
    let client = Client::new(reqwest::blocking::Client::new(), endpoints);

    sweep::Processor::new(client, false).run("sweeps.csv".as_ref())
}
```

Useful modules
--------------
- [`commands`] — one processor per business command.
- [`api`] — the `Api` trait, its HTTPS client and the wire types.
- [`records`] — the CSV record reader.
- [`config`] — environment configuration and endpoint resolution.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod batch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod records;

pub use api::{Api, Client};
pub use config::{Config, Endpoint, Endpoints, Environment};
pub use error::{BatchFailure, Error, Result};
