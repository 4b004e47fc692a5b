use core::{fmt, marker::PhantomData};

use serde::{
    Deserialize, Serialize,
    de::{self, DeserializeSeed, SeqAccess, Visitor},
};

use crate::{Allocator, TryReserveError, Vector};

impl<T: Serialize, A: Allocator<Value = T>> Serialize for Vector<T, A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        <[T]>::serialize(self, serializer)
    }
}

const AN_ARRAY: &str = "an array";

fn map_alloc_error<E: de::Error>(result: Result<(), TryReserveError>) -> Result<(), E> {
    match result {
        Ok(()) => Ok(()),
        Err(error) => Err(E::custom(error)),
    }
}

/// Appends the elements of a sequence to the vector.
impl<'de, T: Deserialize<'de>, A: Allocator<Value = T>> DeserializeSeed<'de> for &'_ mut Vector<T, A> {
    type Value = ();

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(self)
    }
}

impl<'de, T: Deserialize<'de>, A: Allocator<Value = T>> Visitor<'de> for &'_ mut Vector<T, A> {
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(AN_ARRAY)
    }

    fn visit_seq<Seq>(self, mut seq: Seq) -> Result<Self::Value, Seq::Error>
    where
        Seq: SeqAccess<'de>,
    {
        if let Some(size_hint) = seq.size_hint() {
            map_alloc_error(self.try_reserve(self.len().saturating_add(size_hint)))?;
        }

        while let Some(elem) = seq.next_element()? {
            map_alloc_error(self.try_push(elem))?;
        }

        Ok(())
    }
}

impl<'de, T: Deserialize<'de>, A: Allocator<Value = T> + Default> Deserialize<'de> for Vector<T, A> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct VectorVisitor<T, A>(PhantomData<(T, A)>);

        impl<'de, T: Deserialize<'de>, A: Allocator<Value = T> + Default> Visitor<'de> for VectorVisitor<T, A> {
            type Value = Vector<T, A>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(AN_ARRAY)
            }

            fn visit_seq<Seq>(self, seq: Seq) -> Result<Self::Value, Seq::Error>
            where
                Seq: SeqAccess<'de>,
            {
                let mut vec = Vector::new_in(A::default());
                (&mut vec).visit_seq(seq)?;
                Ok(vec)
            }
        }

        deserializer.deserialize_seq(VectorVisitor(PhantomData))
    }
}
