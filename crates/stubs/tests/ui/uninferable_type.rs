use std::time::Duration;
use stubs::Describe;

#[allow(dead_code)]
#[derive(Describe)]
struct Timer {
    elapsed: Duration,
}

fn main() {}
