use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DataEnum, DeriveInput, Expr, ExprLit, Fields, Lit, Meta, Variant, parse_macro_input};

/// 提取文档注释，`///`之后紧跟的一个空格会被去掉，其余缩进保留。
fn extract_doc(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit { lit: Lit::Str(s), .. }) => Some(s.value()),
                _ => None,
            },
            _ => None,
        })
        .map(|line| line.strip_prefix(' ').map(str::to_string).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 匹配任意字段的变体模式。
fn variant_pattern(variant: &Variant) -> proc_macro2::TokenStream {
    let name = &variant.ident;
    match &variant.fields {
        Fields::Unit => quote! { #name },
        Fields::Unnamed(_) => quote! { #name(..) },
        Fields::Named(_) => quote! { #name { .. } },
    }
}

#[proc_macro_derive(CmdHelp)]
pub fn cmd_help_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let enum_name = &input.ident;

    let Data::Enum(DataEnum { variants, .. }) = &input.data else {
        return syn::Error::new_spanned(&input.ident, "CmdHelp can only be derived on enums")
            .to_compile_error()
            .into();
    };

    let patterns = variants.iter().map(variant_pattern).collect::<Vec<_>>();
    let names = variants.iter().map(|v| v.ident.to_string()).collect::<Vec<_>>();
    let docs = variants.iter().map(|v| extract_doc(&v.attrs)).collect::<Vec<_>>();

    let expanded = quote! {
        impl #enum_name {
            /// 变体名称。
            #[allow(dead_code)]
            pub fn name(&self) -> &'static str {
                match self {
                    #(Self::#patterns => #names,)*
                }
            }

            /// 获取帮助信息。
            #[allow(dead_code)]
            pub fn help(&self) -> &'static str {
                match self {
                    #(Self::#patterns => #docs,)*
                }
            }

            /// 获取全部帮助信息：[(name, help), ...]
            pub fn all_help() -> &'static [(&'static str, &'static str)] {
                &[#((#names, #docs)),*]
            }
        }
    };

    TokenStream::from(expanded)
}
