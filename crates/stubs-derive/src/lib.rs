use proc_macro::TokenStream;

mod describe;

/// Derive `stubs::schema::node::Describe` for a struct with named fields.
///
/// Container: `#[stub(name = "...")]`.
/// Fields: `#[stub(key)]`, `#[stub(skip)]`, `#[stub(semantic = "uint32")]`,
/// `#[stub(encode(cpp = "uint32_t", ipc = "uint32_t"))]`.
#[proc_macro_derive(Describe, attributes(stub))]
pub fn derive_describe(input: TokenStream) -> TokenStream {
    describe::derive_describe(input.into()).into()
}
