use message_core::address::{from_canonical, to_canonical, Address, EvmAddress};
use message_core::codec::{self, encode};
use message_core::error::MessageError;
use message_core::id::message_id;
use message_core::types::{Message, HEADER_LEN};
use proptest::prelude::*;

fn arb_message() -> impl Strategy<Value = Message> {
    (
        any::<u8>(),
        any::<u32>(),
        any::<u32>(),
        any::<[u8; 32]>(),
        any::<u32>(),
        any::<[u8; 32]>(),
        proptest::collection::vec(any::<u8>(), 0..256),
    )
        .prop_map(|(version, nonce, origin, sender, destination, recipient, body)| Message {
            version,
            nonce,
            origin,
            sender,
            destination,
            recipient,
            body,
        })
}

proptest! {
    #[test]
    fn accessors_reproduce_encoded_fields(message in arb_message()) {
        let bytes = message.to_vec();

        prop_assert_eq!(bytes.len(), HEADER_LEN + message.body.len());
        prop_assert_eq!(codec::version(&bytes).unwrap(), message.version);
        prop_assert_eq!(codec::nonce(&bytes).unwrap(), message.nonce);
        prop_assert_eq!(codec::origin(&bytes).unwrap(), message.origin);
        prop_assert_eq!(codec::sender(&bytes).unwrap(), message.sender);
        prop_assert_eq!(codec::destination(&bytes).unwrap(), message.destination);
        prop_assert_eq!(codec::recipient(&bytes).unwrap(), message.recipient);
        prop_assert_eq!(codec::body(&bytes).unwrap(), &message.body[..]);
    }

    #[test]
    fn evm_address_roundtrip(address in any::<EvmAddress>()) {
        let canonical = to_canonical(&Address::from(address));
        prop_assert_eq!(from_canonical::<20>(&canonical).unwrap(), address);
    }

    #[test]
    fn dirty_padding_is_rejected(
        address in any::<EvmAddress>(),
        position in 0usize..12,
        value in 1u8..=255,
    ) {
        let mut canonical = to_canonical(&Address::from(address));
        canonical[position] = value;
        prop_assert_eq!(from_canonical::<20>(&canonical), Err(MessageError::InvalidAddressPadding));
    }

    #[test]
    fn encode_is_deterministic(message in arb_message()) {
        let sender = Address::Canonical(message.sender);
        let recipient = Address::Canonical(message.recipient);
        let first = encode(message.version, message.nonce, message.origin, &sender, message.destination, &recipient, &message.body);
        let second = encode(message.version, message.nonce, message.origin, &sender, message.destination, &recipient, &message.body);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, message.to_vec());
    }

    #[test]
    fn single_byte_mutation_changes_id(
        message in arb_message(),
        position in any::<prop::sample::Index>(),
        flip in 1u8..=255,
    ) {
        let original = message.to_vec();
        let mut mutated = original.clone();
        let index = position.index(mutated.len());
        mutated[index] ^= flip;

        prop_assert_ne!(message_id(&original), message_id(&mutated));
    }

    #[test]
    fn short_buffers_never_decode(buffer in proptest::collection::vec(any::<u8>(), 0..HEADER_LEN)) {
        let expected = MessageError::InvalidMessageLength { len: buffer.len() };
        prop_assert_eq!(Message::from_bytes(&buffer), Err(expected.clone()));
        prop_assert_eq!(codec::recipient_address(&buffer), Err(expected));
    }
}
