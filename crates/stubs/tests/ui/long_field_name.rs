use stubs::Describe;

#[allow(dead_code)]
#[derive(Describe)]
struct Wide {
    aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa: u8,
}

fn main() {}
