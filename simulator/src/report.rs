use libemulator::Emulator;


/// Renders the final machine state: pc and registers in decimal, then the
/// first `memquantity` memory cells as hex words, eight per row.
pub fn format_state(emulator: &Emulator, memquantity: usize) -> String {
    let mut out = String::from("Final state:\n");

    out.push_str(&format!("\tpc={:5}\n", emulator.pc));
    for (index, value) in emulator.reg_file.iter().enumerate() {
        out.push_str(&format!("\t${}={:5}\n", index, value));
    }

    let mut row = String::new();
    for (count, value) in emulator.memory.iter().take(memquantity).enumerate() {
        row.push_str(&format!("{:04x} ", value));

        if count % 8 == 7 {
            out.push_str(&row);
            out.push('\n');
            row.clear();
        }
    }

    if !row.is_empty() {
        out.push_str(&row);
        out.push('\n');
    }

    out
}
