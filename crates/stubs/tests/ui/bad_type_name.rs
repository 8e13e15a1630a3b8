use stubs::Describe;

#[allow(dead_code)]
#[derive(Describe)]
#[stub(name = "order book")]
struct OrderBook {
    id: u64,
}

fn main() {}
