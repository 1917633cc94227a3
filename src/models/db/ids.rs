use {
    std::num::ParseIntError,
    derive_more::{Deref, Display, From, Into},
    rocket::request::FromParam,
    serde::{
        Serialize,
        Deserialize,
        Deserializer,
        de::{Error, Unexpected}
    }
};

// Ids may arrive as JSON numbers or as decimal strings (object keys on the
// frontend side). Both are parsed here; anything else is rejected.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i32),
    Text(String)
}

macro_rules! id_type {
    ($name:ident, $expecting:literal) => {
        #[derive(Deref, Display, From, Into, Serialize, Copy, Clone, PartialEq, Eq, Hash, Debug)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl <'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                match RawId::deserialize(deserializer)? {
                    RawId::Int(id) => Ok($name(id)),
                    RawId::Text(text) => text
                        .trim()
                        .parse()
                        .map($name)
                        .map_err(|_| D::Error::invalid_value(Unexpected::Str(&text), &$expecting))
                }
            }
        }

        impl <'a> FromParam<'a> for $name {
            type Error = ParseIntError;

            fn from_param(param: &'a str) -> Result<Self, Self::Error> {
                param.parse().map($name)
            }
        }
    };
}

id_type!(QuestionId, "a question id");

id_type!(CategoryId, "a category id");
