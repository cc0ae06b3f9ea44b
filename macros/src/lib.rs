use convert_case::{Case, Casing};
use proc_macro2::TokenStream;
use quote::quote;

/// Generate a hue based color model from a struct with exactly 3 named
/// fields: an integer hue in degrees followed by two fractional components.
///
/// The generated model validates every component on construction, rounds the
/// fractional components to the crate's storage precision and only exposes
/// its components through accessors.
#[proc_macro]
pub fn gen_model(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand_model(input.into()).into()
}

fn expand_model(input: TokenStream) -> TokenStream {
    let mut input = match syn::parse2::<syn::ItemStruct>(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, a hue followed by two fractional components.");
        };
    }

    let Some(field_names) = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Option<Vec<_>>>()
    else {
        return quote! {
            compile_error!("Model fields must be named.");
        };
    };
    debug_assert!(field_names.len() == 3);

    let field_types = input
        .fields
        .iter()
        .map(|f| f.ty.clone())
        .collect::<Vec<_>>();

    let hue = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    let hue_type = &field_types[0];
    let field2_type = &field_types[1];
    let field3_type = &field_types[2];

    // Labels used in error messages, e.g. "Saturation".
    let labels = field_names
        .iter()
        .map(|name| name.to_string().to_case(Case::Title))
        .collect::<Vec<_>>();
    let hue_label = &labels[0];
    let field2_label = &labels[1];
    let field3_label = &labels[2];

    let docs = field_names
        .iter()
        .map(|name| format!("Return the {} component of the color.", name))
        .collect::<Vec<_>>();
    let hue_doc = &docs[0];
    let field2_doc = &docs[1];
    let field3_doc = &docs[2];

    // Components are only reachable through the generated accessors.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Inherited;
    });

    input
        .attrs
        .push(syn::parse_quote!(#[derive(Clone, Copy, Debug, PartialEq)]));

    let struct_name = input.ident.clone();

    let model_impl: TokenStream = quote! {
        impl #struct_name {
            /// Create a new color with this notation.
            ///
            /// # Errors
            ///
            /// Returns [`crate::Error::OutOfRange`] naming the first component
            /// that is outside of its valid range.
            pub fn new(
                #hue: i32,
                #field2: crate::Component,
                #field3: crate::Component,
            ) -> crate::Result<Self> {
                Ok(Self::new_unchecked(
                    crate::model::check_hue(#hue_label, #hue)?,
                    crate::model::check_fraction(#field2_label, #field2)?,
                    crate::model::check_fraction(#field3_label, #field3)?,
                ))
            }

            /// Create a new color from components that are already known to
            /// be in range.
            pub(crate) fn new_unchecked(
                #hue: #hue_type,
                #field2: #field2_type,
                #field3: #field3_type,
            ) -> Self {
                debug_assert!(#hue <= crate::model::MAX_HUE);
                debug_assert!(crate::model::FRACTION_RANGE.contains(&#field2));
                debug_assert!(crate::model::FRACTION_RANGE.contains(&#field3));

                Self {
                    #hue,
                    #field2: crate::math::round_component(#field2),
                    #field3: crate::math::round_component(#field3),
                }
            }

            #[doc = #hue_doc]
            pub fn #hue(&self) -> #hue_type {
                self.#hue
            }

            #[doc = #field2_doc]
            pub fn #field2(&self) -> #field2_type {
                self.#field2
            }

            #[doc = #field3_doc]
            pub fn #field3(&self) -> #field3_type {
                self.#field3
            }

            /// Convert this model into generic components, with the hue in
            /// degrees.
            pub fn to_components(&self) -> crate::Components {
                crate::Components(
                    crate::Component::from(self.#hue),
                    self.#field2,
                    self.#field3,
                )
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
}
