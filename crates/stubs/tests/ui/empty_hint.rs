use stubs::Describe;

#[allow(dead_code)]
#[derive(Describe)]
struct Blank {
    #[stub(encode(cpp = ""))]
    id: u64,
}

fn main() {}
