//! Serde support: a tree serializes as its ascending key sequence and
//! deserializes from any key sequence, dropping duplicates.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use super::AvlTree;

impl<K> Serialize for AvlTree<K>
where
    K: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        let mut result = Ok(());
        self.for_each_in_order(|k| {
            if result.is_ok() {
                result = seq.serialize_element(k);
            }
        });
        result?;
        seq.end()
    }
}

struct KeysVisitor<K>(PhantomData<K>);

impl<'de, K> Visitor<'de> for KeysVisitor<K>
where
    K: Deserialize<'de> + Ord,
{
    type Value = AvlTree<K>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence of keys")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut tree = AvlTree::new();
        while let Some(key) = seq.next_element()? {
            tree.insert(key);
        }
        Ok(tree)
    }
}

impl<'de, K> Deserialize<'de> for AvlTree<K>
where
    K: Deserialize<'de> + Ord,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(KeysVisitor(PhantomData))
    }
}
