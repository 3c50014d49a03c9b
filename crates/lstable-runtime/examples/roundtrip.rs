//! Generates a table set for the 8-word variant and round-trips one block.

use lstable_runtime::{LsCipher, TableGenerator, Width};

fn main() {
    let tables = TableGenerator::new()
        .generate(Width::W8)
        .expect("table generation succeeds");
    let cipher = LsCipher::with_default_rounds(tables).expect("tables validate");

    let mut block = *b"sixteen byte blk";
    let plaintext = block;

    cipher.encrypt_block(&mut block).expect("width matches");
    println!("ciphertext: {block:02x?}");

    cipher.decrypt_block(&mut block).expect("width matches");
    assert_eq!(block, plaintext);

    println!(
        "round-tripped a {}-byte block over {} rounds",
        cipher.width().block_bytes(),
        cipher.rounds()
    );
}
