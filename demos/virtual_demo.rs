use xindicator::backends::virtual_input::VirtualBackend;
use xindicator::{Device, DeviceLevel, DeviceManager};

fn main() {
    // Seed a backend with a small device tree, no X server needed
    let mut keyboard = Device::new(
        3,
        "Virtual core keyboard",
        Some(2),
        DeviceLevel::Master,
        "keyboard",
    );
    keyboard.add_child(Device::new(
        10,
        "AT Translated Set 2 keyboard",
        Some(3),
        DeviceLevel::Slave,
        "keyboard",
    ));

    let backend = VirtualBackend::new(vec![keyboard]);
    let mut manager = DeviceManager::with_backend(Box::new(backend));

    manager.refresh().expect("virtual backend always lists");
    for device in manager.devices() {
        println!("(Virtual) {} id={} enabled={}", device.name, device.id, device.enabled);
        for child in &device.children {
            println!("(Virtual)   ↳ {} id={} enabled={}", child.name, child.id, child.enabled);
        }
    }

    // Toggle the slave off and show the refreshed state
    manager.set_enabled(10, false).expect("device 10 exists");
    let device = manager.device(10).expect("device 10 cached");
    println!("(Virtual) {} toggled, enabled={}", device.name, device.enabled);
}
