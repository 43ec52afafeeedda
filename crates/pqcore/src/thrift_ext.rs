//! Thrift encoding of the wire enumerations.
use thrift::protocol::{
    TFieldIdentifier, TInputProtocol, TOutputProtocol, TStructIdentifier, TType,
};
use thrift::{ProtocolError, ProtocolErrorKind};

use crate::column_order::ColumnOrder;
use crate::encoding::Encoding;
use crate::physical_type::PhysicalType;
use crate::repetition::Repetition;

/// Reads and writes the struct to Thrift protocols.
///
/// Unlike [`thrift::protocol::TSerializable`] this uses generics instead of trait objects
pub trait TSerializable: Sized {
    fn read_from_in_protocol<T: TInputProtocol>(i_prot: &mut T) -> thrift::Result<Self>;
    fn write_to_out_protocol<T: TOutputProtocol>(&self, o_prot: &mut T) -> thrift::Result<()>;
}

fn invalid_data(err: pqcore_error::PqcoreError) -> thrift::Error {
    thrift::Error::Protocol(ProtocolError::new(
        ProtocolErrorKind::InvalidData,
        err.get_msg().to_string(),
    ))
}

impl TSerializable for PhysicalType {
    fn read_from_in_protocol<T: TInputProtocol>(i_prot: &mut T) -> thrift::Result<Self> {
        let code = i_prot.read_i32()?;
        PhysicalType::try_from(code).map_err(invalid_data)
    }

    fn write_to_out_protocol<T: TOutputProtocol>(&self, o_prot: &mut T) -> thrift::Result<()> {
        o_prot.write_i32(self.code())
    }
}

impl TSerializable for Encoding {
    fn read_from_in_protocol<T: TInputProtocol>(i_prot: &mut T) -> thrift::Result<Self> {
        let code = i_prot.read_i32()?;
        Encoding::try_from(code).map_err(invalid_data)
    }

    fn write_to_out_protocol<T: TOutputProtocol>(&self, o_prot: &mut T) -> thrift::Result<()> {
        o_prot.write_i32(self.code())
    }
}

impl TSerializable for Repetition {
    fn read_from_in_protocol<T: TInputProtocol>(i_prot: &mut T) -> thrift::Result<Self> {
        let code = i_prot.read_i32()?;
        Repetition::try_from(code).map_err(invalid_data)
    }

    fn write_to_out_protocol<T: TOutputProtocol>(&self, o_prot: &mut T) -> thrift::Result<()> {
        o_prot.write_i32(self.code())
    }
}

/// Skip every field of a struct we don't care about the contents of.
fn skip_struct<T: TInputProtocol>(i_prot: &mut T) -> thrift::Result<()> {
    i_prot.read_struct_begin()?;
    loop {
        let field = i_prot.read_field_begin()?;
        if field.field_type == TType::Stop {
            break;
        }
        i_prot.skip(field.field_type)?;
        i_prot.read_field_end()?;
    }
    i_prot.read_struct_end()
}

impl TSerializable for ColumnOrder {
    fn read_from_in_protocol<T: TInputProtocol>(i_prot: &mut T) -> thrift::Result<Self> {
        let mut order = ColumnOrder::Undefined;

        i_prot.read_struct_begin()?;
        loop {
            let field = i_prot.read_field_begin()?;
            if field.field_type == TType::Stop {
                break;
            }
            match field.id {
                Some(1) if field.field_type == TType::Struct => {
                    skip_struct(i_prot)?;
                    order = ColumnOrder::TypeDefinedOrder;
                }
                _ => i_prot.skip(field.field_type)?,
            }
            i_prot.read_field_end()?;
        }
        i_prot.read_struct_end()?;

        Ok(order)
    }

    fn write_to_out_protocol<T: TOutputProtocol>(&self, o_prot: &mut T) -> thrift::Result<()> {
        o_prot.write_struct_begin(&TStructIdentifier::new("ColumnOrder"))?;
        if let ColumnOrder::TypeDefinedOrder = self {
            o_prot.write_field_begin(&TFieldIdentifier::new(
                "TYPE_ORDER",
                TType::Struct,
                self.code(),
            ))?;
            o_prot.write_struct_begin(&TStructIdentifier::new("TypeDefinedOrder"))?;
            o_prot.write_field_stop()?;
            o_prot.write_struct_end()?;
            o_prot.write_field_end()?;
        }
        o_prot.write_field_stop()?;
        o_prot.write_struct_end()
    }
}

#[cfg(test)]
mod tests {
    use thrift::protocol::{TCompactInputProtocol, TCompactOutputProtocol};

    use super::*;

    fn write<V: TSerializable>(v: &V) -> Vec<u8> {
        let mut buf = Vec::new();
        let mut o_prot = TCompactOutputProtocol::new(&mut buf);
        v.write_to_out_protocol(&mut o_prot).unwrap();
        o_prot.flush().unwrap();
        drop(o_prot);
        buf
    }

    fn read<V: TSerializable>(buf: &[u8]) -> thrift::Result<V> {
        let mut i_prot = TCompactInputProtocol::new(buf);
        V::read_from_in_protocol(&mut i_prot)
    }

    #[test]
    fn encoding_wire_code() {
        // Compact protocol zigzag varints: 8 -> 16.
        let buf = write(&Encoding::RleDictionary);
        assert_eq!(vec![16], buf);
        assert_eq!(Encoding::RleDictionary, read::<Encoding>(&buf).unwrap());
    }

    #[test]
    fn physical_type_and_repetition() {
        let buf = write(&PhysicalType::FixedLenByteArray);
        assert_eq!(
            PhysicalType::FixedLenByteArray,
            read::<PhysicalType>(&buf).unwrap()
        );

        let buf = write(&Repetition::Optional);
        assert_eq!(Repetition::Optional, read::<Repetition>(&buf).unwrap());
    }

    #[test]
    fn unknown_encoding_code() {
        let buf = write(&PhysicalType::Int32);
        // Code 1 is not an assigned encoding.
        assert!(read::<Encoding>(&buf).is_err());
    }

    #[test]
    fn undefined_sentinels_rejected() {
        let mut buf = Vec::new();
        let mut o_prot = TCompactOutputProtocol::new(&mut buf);
        o_prot.write_i32(PhysicalType::Undefined.code()).unwrap();
        o_prot.write_i32(Repetition::Undefined.code()).unwrap();
        o_prot.flush().unwrap();
        drop(o_prot);

        let mut i_prot = TCompactInputProtocol::new(&buf[..]);
        assert!(PhysicalType::read_from_in_protocol(&mut i_prot).is_err());
        assert!(Repetition::read_from_in_protocol(&mut i_prot).is_err());
    }

    #[test]
    fn column_order_union() {
        let buf = write(&ColumnOrder::TypeDefinedOrder);
        assert_eq!(
            ColumnOrder::TypeDefinedOrder,
            read::<ColumnOrder>(&buf).unwrap()
        );

        let buf = write(&ColumnOrder::Undefined);
        assert_eq!(vec![0], buf);
        assert_eq!(ColumnOrder::Undefined, read::<ColumnOrder>(&buf).unwrap());
    }
}
