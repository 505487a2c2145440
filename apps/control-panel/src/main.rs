fn main() {
    if let Err(error) = dockpilot_control_panel::run() {
        // Tracing is initialized inside run() after argument parsing.
        tracing::error!(%error, "control panel failed");
        std::process::exit(1);
    }
}
