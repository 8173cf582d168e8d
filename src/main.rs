use std::io;

fn main() -> io::Result<()> {
    chess_rules::driver::run_driver_loop()
}
