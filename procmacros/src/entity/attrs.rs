use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase,
};
use syn::{Attribute, Error, Field, LitStr, Result};

const ATTR: &str = "entity";

/// Case convention applied to field names to derive column names.
#[derive(Clone, Copy)]
pub(crate) enum RenameRule {
    Lower,
    Upper,
    Pascal,
    Camel,
    Snake,
    ScreamingSnake,
    Kebab,
}

impl RenameRule {
    fn parse(lit: &LitStr) -> Result<Self> {
        Ok(match lit.value().as_str() {
            "lowercase" => RenameRule::Lower,
            "UPPERCASE" => RenameRule::Upper,
            "PascalCase" => RenameRule::Pascal,
            "camelCase" => RenameRule::Camel,
            "snake_case" => RenameRule::Snake,
            "SCREAMING_SNAKE_CASE" => RenameRule::ScreamingSnake,
            "kebab-case" => RenameRule::Kebab,
            other => {
                return Err(Error::new_spanned(
                    lit,
                    format!(
                        "unknown rename rule `{other}`, expected one of: lowercase, UPPERCASE, \
                         PascalCase, camelCase, snake_case, SCREAMING_SNAKE_CASE, kebab-case"
                    ),
                ));
            }
        })
    }

    pub(crate) fn apply(self, field: &str) -> String {
        match self {
            RenameRule::Lower => field.to_ascii_lowercase(),
            RenameRule::Upper => field.to_ascii_uppercase(),
            RenameRule::Pascal => field.to_upper_camel_case(),
            RenameRule::Camel => field.to_lower_camel_case(),
            RenameRule::Snake => field.to_snake_case(),
            RenameRule::ScreamingSnake => field.to_shouty_snake_case(),
            RenameRule::Kebab => field.to_kebab_case(),
        }
    }
}

/// Struct-level `#[entity(...)]` options.
#[derive(Default)]
pub(crate) struct ContainerAttrs {
    pub(crate) rename_all: Option<RenameRule>,
    pub(crate) name: Option<String>,
}

impl ContainerAttrs {
    pub(crate) fn parse(attrs: &[Attribute]) -> Result<Self> {
        let mut out = Self::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident(ATTR)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    let lit: LitStr = meta.value()?.parse()?;
                    out.rename_all = Some(RenameRule::parse(&lit)?);
                } else if meta.path.is_ident("name") {
                    let lit: LitStr = meta.value()?.parse()?;
                    out.name = Some(lit.value());
                } else {
                    return Err(meta.error("expected `rename_all = \"...\"` or `name = \"...\"`"));
                }
                Ok(())
            })?;
        }
        Ok(out)
    }

    /// Column name for a field without an explicit `column`.
    pub(crate) fn column_for(&self, field: &str) -> String {
        match self.rename_all {
            Some(rule) => rule.apply(field),
            None => field.to_string(),
        }
    }
}

/// How a field takes part in mapping.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldRole {
    Column,
    Relation,
    Ignore,
}

/// Field-level `#[entity(...)]` options.
pub(crate) struct FieldAttrs {
    pub(crate) role: FieldRole,
    pub(crate) column: Option<LitStr>,
    pub(crate) optional: bool,
}

impl FieldAttrs {
    pub(crate) fn parse(field: &Field) -> Result<Self> {
        let mut role = FieldRole::Column;
        let mut column = None;
        let mut optional = false;

        for attr in field.attrs.iter().filter(|attr| attr.path().is_ident(ATTR)) {
            attr.parse_nested_meta(|meta| {
                let path = meta
                    .path
                    .get_ident()
                    .ok_or_else(|| Error::new_spanned(&meta.path, "Expected identifier"))?
                    .to_string();

                match path.as_str() {
                    "column" => column = Some(meta.value()?.parse::<LitStr>()?),
                    "relation" => role = claim(role, FieldRole::Relation, &meta)?,
                    "ignore" => role = claim(role, FieldRole::Ignore, &meta)?,
                    "optional" => optional = true,
                    _ => {
                        return Err(meta.error(
                            "expected one of: `column = \"...\"`, `relation`, `ignore`, `optional`",
                        ));
                    }
                }
                Ok(())
            })?;
        }

        if role != FieldRole::Column && (column.is_some() || optional) {
            return Err(Error::new_spanned(
                field,
                "`column` and `optional` only apply to column fields",
            ));
        }

        Ok(Self {
            role,
            column,
            optional,
        })
    }
}

fn claim(
    current: FieldRole,
    wanted: FieldRole,
    meta: &syn::meta::ParseNestedMeta<'_>,
) -> Result<FieldRole> {
    if current != FieldRole::Column && current != wanted {
        return Err(meta.error("a field is either a `relation` or `ignore`d, not both"));
    }
    Ok(wanted)
}
