//! End-to-end flow: parse a captured listing, serve it through the virtual
//! backend, and drive the manager the way a UI layer would.

use xindicator::backends::virtual_input::VirtualBackend;
use xindicator::{parse, DeviceLevel, DeviceManager};

const CAPTURED_LISTING: &str = concat!(
    "\n",
    "⎡ Virtual core pointer                    \tid=2\t[master pointer  (3)]\n",
    "⎜   ↳ Virtual core XTEST pointer          \tid=4\t[slave  pointer  (2)]\n",
    "        Reporting 3 classes:\n",
    "            Class originated from: 4. Type: XIButtonClass\n",
    "            Buttons supported: 10\n",
    "⎜   ↳ SynPS/2 Synaptics TouchPad          \tid=11\t[slave  pointer  (2)]\n",
    "⎣ Virtual core keyboard                   \tid=3\t[master keyboard (2)]\n",
    "    ↳ Virtual core XTEST keyboard         \tid=5\t[slave  keyboard (3)]\n",
    "    ↳ AT Translated Set 2 keyboard        \tid=10\t[slave  keyboard (3)]\n",
    "        This device is disabled\n",
    "~ Wacom Intuos S Pen                      \tid=14\t[floating slave]\n",
);

#[test]
fn test_listing_round_trip_through_manager() {
    let forest = parse(CAPTURED_LISTING).expect("captured listing parses");
    let total: usize = forest.iter().map(|d| d.count()).sum();
    assert_eq!(total, 7);

    let mut manager = DeviceManager::with_backend(Box::new(VirtualBackend::new(forest)));
    let devices = manager.refresh().expect("virtual refresh");

    // Masters and the floating pen at the root, slaves below their masters.
    assert_eq!(devices.len(), 3);
    assert_eq!(devices[0].children.len(), 2);
    assert_eq!(devices[1].children.len(), 2);
    assert!(devices[2].is_floating());
    assert_eq!(devices[2].level, DeviceLevel::Slave);
    assert_eq!(devices[2].parent_id, None);

    // The marker line disabled exactly the AT keyboard.
    let disabled: Vec<u32> = devices
        .iter()
        .flat_map(|d| d.iter())
        .filter(|d| !d.enabled)
        .map(|d| d.id)
        .collect();
    assert_eq!(disabled, vec![10]);
}

#[test]
fn test_toggle_cycle_matches_what_a_menu_needs() {
    let forest = parse(CAPTURED_LISTING).expect("captured listing parses");
    let mut manager = DeviceManager::with_backend(Box::new(VirtualBackend::new(forest)));
    manager.refresh().expect("virtual refresh");

    // Re-enable the keyboard the listing reported as disabled.
    assert!(!manager.device(10).expect("keyboard cached").enabled);
    manager.set_enabled(10, true).expect("toggle keyboard on");
    assert!(manager.device(10).expect("keyboard cached").enabled);

    // Disable the touchpad; the change must survive a refresh.
    manager.set_enabled(11, false).expect("toggle touchpad off");
    manager.refresh().expect("virtual refresh");
    assert!(!manager.device(11).expect("touchpad re-listed").enabled);
}
