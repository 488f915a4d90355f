use portal_wallet_core::{init_with_config, PlatformStorage, FileStorage};

fn main() {
    let config = match init_with_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid wallet core configuration: {}", e);
            std::process::exit(1);
        }
    };

    println!("Portal Wallet Core Configuration:\n");
    println!("  Data directory: {}", config.data_dir.display());
    println!("  Storage namespace: {}", config.storage_namespace);
    println!("  Storage directory: {}", config.storage_dir().display());
    println!("  Address prefix: {}", config.address_prefix);
    println!("  Minimum password length: {}", config.min_password_length);
    println!("  Log filter: {}", config.log_filter);

    let stored = if config.storage_dir().is_dir() {
        FileStorage::new(config.storage_dir())
            .and_then(|storage| storage.list_keys())
            .map(|keys| if keys.is_empty() { "(none)".to_string() } else { keys.join(", ") })
            .unwrap_or_else(|e| format!("(unreadable: {})", e))
    } else {
        "(not created)".to_string()
    };
    println!("  Stored keys: {}", stored);
}
