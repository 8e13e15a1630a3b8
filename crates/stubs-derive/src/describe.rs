use darling::{Error as DarlingError, FromDeriveInput, FromField, ast::Data, util::Ignored};
use proc_macro2::TokenStream;
use quote::quote;
use std::collections::{BTreeMap, HashMap};
use stubs_schema::{
    types::SemanticType,
    validate::naming::{validate_field_name, validate_type_name},
};
use syn::{DeriveInput, Generics, Ident, Type};

// derive_describe
pub fn derive_describe(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    DescribeInput::from_derive_input(&input)
        .and_then(|node| node.generate())
        .unwrap_or_else(DarlingError::write_errors)
}

///
/// DescribeInput
///

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(stub), supports(struct_named))]
struct DescribeInput {
    ident: Ident,
    generics: Generics,
    data: Data<Ignored, DescribeField>,

    #[darling(default)]
    name: Option<String>,
}

impl DescribeInput {
    fn type_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.ident.to_string())
    }

    fn generate(self) -> Result<TokenStream, DarlingError> {
        let type_name = self.type_name();
        validate_type_name(&type_name)
            .map_err(|msg| DarlingError::custom(msg).with_span(&self.ident))?;

        let fields = self
            .data
            .take_struct()
            .ok_or_else(|| DarlingError::unsupported_shape("expected a struct"))?
            .fields;

        let mut errors = DarlingError::accumulator();
        let mut parts = Vec::new();
        let mut keys = Vec::new();

        for field in fields.iter().filter(|f| !f.skip) {
            if let Some(part) = errors.handle(field.schema_part()) {
                if field.key {
                    keys.push(field);
                }
                parts.push(part);
            }
        }

        if let [_, extra, ..] = keys.as_slice() {
            let names = keys
                .iter()
                .map(|f| f.name())
                .collect::<Vec<_>>()
                .join(", ");
            errors.push(
                DarlingError::custom(format!("multiple key fields: {names}")).with_span(&extra.ty),
            );
        }

        errors.finish()?;

        let ident = &self.ident;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        Ok(quote! {
            impl #impl_generics ::stubs::schema::node::Describe for #ident #ty_generics #where_clause {
                fn descriptor() -> ::stubs::schema::node::TypeDescriptor {
                    ::stubs::schema::node::TypeDescriptor::new(#type_name)
                        #(.with_field(#parts))*
                }
            }
        })
    }
}

///
/// DescribeField
///

#[derive(Debug, FromField)]
#[darling(attributes(stub))]
struct DescribeField {
    ident: Option<Ident>,
    ty: Type,

    #[darling(default)]
    key: bool,

    #[darling(default)]
    skip: bool,

    #[darling(default)]
    semantic: Option<SemanticType>,

    #[darling(default)]
    encode: HashMap<String, String>,
}

impl DescribeField {
    fn name(&self) -> String {
        self.ident
            .as_ref()
            .map(|ident| {
                let name = ident.to_string();
                name.strip_prefix("r#").map_or_else(|| name.clone(), str::to_string)
            })
            .unwrap_or_default()
    }

    fn semantic_type(&self) -> Result<SemanticType, DarlingError> {
        if let Some(semantic) = self.semantic {
            return Ok(semantic);
        }

        let ty = &self.ty;
        let rendered = quote!(#ty).to_string();

        SemanticType::from_rust_type(&rendered).ok_or_else(|| {
            DarlingError::custom(format!(
                "cannot infer a semantic type for `{rendered}`, add #[stub(semantic = \"...\")]"
            ))
            .with_span(ty)
        })
    }

    fn schema_part(&self) -> Result<TokenStream, DarlingError> {
        let name = self.name();
        validate_field_name(&name).map_err(|msg| DarlingError::custom(msg).with_span(&self.ty))?;

        let semantic = self.semantic_type()?;

        // sorted so the generated code is stable across builds
        let hints = self.encode.iter().collect::<BTreeMap<_, _>>();
        for (target, token) in &hints {
            if token.is_empty() {
                return Err(DarlingError::custom(format!(
                    "encoding hint for '{target}' is empty"
                ))
                .with_span(&self.ty));
            }
        }
        let targets = hints.keys();
        let tokens = hints.values();

        let key = self.key.then(|| quote!(.key()));

        Ok(quote! {
            ::stubs::schema::node::FieldDescriptor::new(#name, #semantic)
                #(.with_hint(#targets, #tokens))*
                #key
        })
    }
}
