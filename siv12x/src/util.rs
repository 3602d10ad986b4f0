// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross

/// Check if the n-th bit is set.
///
/// Bits are 0-indexed, from the LSB.
pub(crate) fn is_bit_set<B>(value: B, index: usize) -> bool
where
    B: num_traits::PrimInt + num_traits::Unsigned,
{
    (value & (B::one() << index)) > B::zero()
}

/// Replace the bits of `current` selected by `mask` with those from `new_value`.
pub(crate) fn masked_update<B>(current: B, mask: B, new_value: B) -> B
where
    B: num_traits::PrimInt + num_traits::Unsigned,
{
    (current & !mask) | (new_value & mask)
}

#[cfg(test)]
mod test {
    #[test]
    fn is_bit_set() {
        for n in 0..8 {
            let value: u8 = 1 << n;
            assert!(
                super::is_bit_set(value, n),
                "is_bit_set was incorrect for bit {}",
                n
            );
            assert!(!super::is_bit_set(!value, n));
        }
    }

    #[test]
    fn masked_update() {
        assert_eq!(super::masked_update(0xF0u8, 0x0C, 0x04), 0xF4);
        assert_eq!(super::masked_update(0xFFu8, 0x0C, 0x00), 0xF3);
        // Bits outside of the mask in the new value are ignored
        assert_eq!(super::masked_update(0x00u8, 0x80, 0x7F), 0x00);
    }
}
