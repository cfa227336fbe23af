pub fn u32str(x: u32) -> [u8; 4] {
    x.to_be_bytes()
}

pub fn str32u(x: &[u8]) -> u32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&x[..4]);
    u32::from_be_bytes(bytes)
}
