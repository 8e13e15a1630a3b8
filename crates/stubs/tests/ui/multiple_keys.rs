use stubs::Describe;

#[allow(dead_code)]
#[derive(Describe)]
struct TwoKeys {
    #[stub(key)]
    a: u32,
    #[stub(key)]
    b: u32,
}

fn main() {}
