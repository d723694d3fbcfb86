use xindicator::{Device, DeviceManager};

fn print_tree(devices: &[Device]) {
    for device in devices {
        println!("{}", describe(device, 0));
        for child in &device.children {
            println!("{}", describe(child, 1));
        }
    }
}

fn describe(device: &Device, depth: usize) -> String {
    let indent = "  ".repeat(depth);
    let connector = if depth > 0 { "↳ " } else { "" };
    let state = if device.enabled { "" } else { " (disabled)" };
    format!(
        "{}{}{} \tid={} \t[{} {}]{}",
        indent, connector, device.name, device.id, device.level, device.kind, state
    )
}

fn main() {
    let mut manager = DeviceManager::new();

    match manager.refresh() {
        Ok(devices) => {
            if std::env::args().any(|arg| arg == "--json") {
                let json = serde_json::to_string_pretty(devices).expect("serialize device tree");
                println!("{json}");
            } else {
                print_tree(devices);
            }
        }
        Err(e) => eprintln!("failed to list devices: {e}"),
    }
}
