/// Greedy engine against itself, printing every position
use reversi::{GameEngine, Glyphs, Side};

fn main() {
    let width = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(reversi::DEFAULT_WIDTH);

    let mut game = match GameEngine::new(width) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    println!("=== Reversi self-play on a {width}x{width} board ===\n");
    print!("{}", game.render(&Glyphs::ASCII));

    let mut ply = 0;
    while let Ok(pos) = game.best_step() {
        let side = game.to_move();
        let flipped = game.apply(pos).expect("heuristic picks legal moves");
        ply += 1;

        let (white, black) = game.score();
        println!("\n{ply}. {side} plays {}, {} (flipped {flipped}) X {black} O {white}", pos.row + 1, pos.col + 1);
        print!("{}", game.render(&Glyphs::ASCII));
    }

    let (white, black) = game.score();
    let result = match game.winner() {
        Some(Side::Black) => "black wins",
        Some(Side::White) => "white wins",
        None => "draw",
    };
    println!("\n{} has no move: {result} ({black} to {white})", game.to_move());
}
