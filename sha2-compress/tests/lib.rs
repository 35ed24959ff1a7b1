use hex_literal::hex;
use sha2_compress::{
    compress256, compress512,
    consts::{H224, H256, H384, H512, H512_224, H512_256},
    sha256, sha512,
};

/// Apply FIPS 180-4 padding with a `len_bytes`-byte length field.
fn pad(msg: &[u8], block_size: usize, len_bytes: usize) -> Vec<u8> {
    let mut out = msg.to_vec();
    out.push(0x80);
    while out.len() % block_size != block_size - len_bytes {
        out.push(0);
    }
    let bits = (msg.len() as u128) * 8;
    out.extend_from_slice(&bits.to_be_bytes()[16 - len_bytes..]);
    out
}

fn digest256(backend: sha256::Backend, iv: sha256::State, msg: &[u8]) -> Vec<u8> {
    let mut state = iv;
    backend.compress(&mut state, &pad(msg, sha256::BLOCK_SIZE, 8));
    state.iter().flat_map(|w| w.to_be_bytes()).collect()
}

fn digest512(backend: sha512::Backend, iv: sha512::State, msg: &[u8]) -> Vec<u8> {
    let mut state = iv;
    backend.compress(&mut state, &pad(msg, sha512::BLOCK_SIZE, 16));
    state.iter().flat_map(|w| w.to_be_bytes()).collect()
}

fn backends256() -> impl Iterator<Item = sha256::Backend> {
    sha256::Backend::ALL.into_iter().filter(|b| b.is_available())
}

fn backends512() -> impl Iterator<Item = sha512::Backend> {
    sha512::Backend::ALL.into_iter().filter(|b| b.is_available())
}

#[test]
fn sha256_padded_empty_block() {
    let mut block = [0u8; sha256::BLOCK_SIZE];
    block[0] = 0x80;

    for backend in backends256() {
        let mut state = H256;
        backend.compress(&mut state, &block);
        assert_eq!(
            state,
            [
                0xe3b0c442, 0x98fc1c14, 0x9afbf4c8, 0x996fb924, 0x27ae41e4, 0x649b934c, 0xa495991b,
                0x7852b855
            ],
            "{}",
            backend.name()
        );
    }
}

#[test]
fn sha512_padded_empty_block() {
    let mut block = [0u8; sha512::BLOCK_SIZE];
    block[0] = 0x80;

    for backend in backends512() {
        let mut state = H512;
        backend.compress(&mut state, &block);
        assert_eq!(state[0].to_be_bytes(), hex!("cf83e1357eefb8bd"), "{}", backend.name());
        assert_eq!(
            digest512(backend, H512, b""),
            hex!(
                "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce"
                "47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
            )
        );
    }
}

// FIPS 180-2 Appendix B and C
#[test]
fn sha256_known_answers() {
    for backend in backends256() {
        assert_eq!(
            digest256(backend, H256, b"abc"),
            hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );
        assert_eq!(
            digest256(
                backend,
                H256,
                b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"
            ),
            hex!("248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1")
        );
    }
}

#[test]
fn sha512_known_answers() {
    for backend in backends512() {
        assert_eq!(
            digest512(backend, H512, b"abc"),
            hex!(
                "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a"
                "2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
            )
        );
        assert_eq!(
            digest512(
                backend,
                H512,
                b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmn\
                  hijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu"
            ),
            hex!(
                "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018"
                "501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909"
            )
        );
    }
}

#[test]
fn million_a() {
    let msg = vec![b'a'; 1_000_000];
    assert_eq!(
        digest256(sha256::Backend::detect(), H256, &msg),
        hex!("cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0")
    );
    assert_eq!(
        digest512(sha512::Backend::detect(), H512, &msg),
        hex!(
            "e718483d0ce769644e2e42c7bc15b4638e1f98b13b2044285632a803afa973eb"
            "de0ff244877ea60a4cb0432ce577c31beb009c5c2c49aa2e4eadb217ad8cc09b"
        )
    );
}

#[test]
fn truncated_variants() {
    let b256 = sha256::Backend::detect();
    let b512 = sha512::Backend::detect();

    assert_eq!(
        digest256(b256, H224, b"")[..28],
        hex!("d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f")
    );
    assert_eq!(
        digest512(b512, H384, b"")[..48],
        hex!(
            "38b060a751ac96384cd9327eb1b1e36a21fdb71114be0743"
            "4c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b"
        )
    );
    assert_eq!(
        digest512(b512, H512_224, b"")[..28],
        hex!("6ed0dd02806fa89e25de060c19d3ac86cabb87d6a0ddd05c333b84f4")
    );
    assert_eq!(
        digest512(b512, H512_256, b"")[..32],
        hex!("c672b8d1ef56ed28ab87c3622c5114069bdd3ad7b8f9737498d0c01ecef0967a")
    );
}

#[test]
fn zero_length_is_noop() {
    for backend in backends256() {
        let mut state: sha256::State = [1, 2, 3, 4, 5, 6, 7, 8];
        backend.compress(&mut state, &[]);
        assert_eq!(state, [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    for backend in backends512() {
        let mut state: sha512::State = [1, 2, 3, 4, 5, 6, 7, 8];
        backend.compress(&mut state, &[]);
        assert_eq!(state, [1, 2, 3, 4, 5, 6, 7, 8]);
    }
}

#[test]
fn trailing_partial_block_ignored() {
    let data = (0..300u32).map(|n| (n * 31) as u8).collect::<Vec<_>>();

    let mut expected = H256;
    compress256(&mut expected, &data[..4 * sha256::BLOCK_SIZE]);
    for backend in backends256() {
        let mut state = H256;
        backend.compress(&mut state, &data);
        assert_eq!(state, expected, "{}", backend.name());
    }

    let mut expected = H512;
    compress512(&mut expected, &data[..2 * sha512::BLOCK_SIZE]);
    for backend in backends512() {
        let mut state = H512;
        backend.compress(&mut state, &data);
        assert_eq!(state, expected, "{}", backend.name());
    }
}

#[test]
fn unavailable_backend_falls_back() {
    let mut block = [0u8; sha256::BLOCK_SIZE];
    block[0] = 0x80;

    let mut expected = H256;
    sha256::Backend::Soft.compress(&mut expected, &block);
    for backend in sha256::Backend::ALL {
        let mut state = H256;
        backend.compress(&mut state, &block);
        assert_eq!(state, expected, "{}", backend.name());
    }
}

#[test]
fn detect_prefers_accelerated() {
    let detected = sha512::Backend::detect();
    assert!(detected.is_available());
    if sha512::Backend::ArmSha3.is_available() {
        assert_eq!(detected, sha512::Backend::ArmSha3);
    } else {
        assert_eq!(detected, sha512::Backend::Soft);
    }

    let detected = sha256::Backend::detect();
    assert!(detected.is_available());
    for accelerated in [sha256::Backend::ShaNi, sha256::Backend::ArmSha2] {
        if accelerated.is_available() {
            assert_eq!(detected, accelerated);
        }
    }
}
