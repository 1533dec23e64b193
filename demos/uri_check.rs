//! Parse URIs from the command line and print their components

use anyhow::Result;
use simcommon_core::Uri;

fn main() -> Result<()> {
    env_logger::init();

    for arg in std::env::args().skip(1) {
        match Uri::parse(&arg) {
            Ok(uri) => {
                println!("{arg}");
                println!("  scheme:    {}", uri.scheme);
                println!("  authority: {}", uri.authority.as_deref().unwrap_or("-"));
                println!("  path:      {}", uri.path);
                println!("  query:     {}", uri.query.as_deref().unwrap_or("-"));
                println!("  fragment:  {}", uri.fragment.as_deref().unwrap_or("-"));
            }
            Err(e) => println!("{arg}: {e}"),
        }
    }

    Ok(())
}
