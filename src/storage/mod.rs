pub mod codec;

pub use codec::{
    decode_collection, encode_collection, load_collection, save_collection, CollectionMetadata,
};
