fn main() {
    tango::process_root().unwrap();
}
