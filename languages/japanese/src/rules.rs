use crate::grammar::GrammarRule;
use crate::jlpt::JlptLevel::{N1, N2, N3, N4, N5};

/// Built-in grammar points, N5 to N1. Declaration order breaks ties between
/// patterns of equal length.
pub static DEFAULT_RULES: &[GrammarRule] = &[
    // N5 particles, guarded against the polite forms they appear inside
    GrammarRule::new("は", N5, "Partícula 'wa', marca o tópico da frase")
        .not_after(&["で"])
        .not_before(&["です", "した"]),
    GrammarRule::new("が", N5, "Partícula 'ga', indica o sujeito da frase, especialmente para dar ênfase, introduzir novas informações ou com verbos de habilidade/afinidade. Também pode indicar 'mas' no final de uma frase.")
        .not_after(&["で"])
        .not_before(&["あります", "ありません"]),
    GrammarRule::new("を", N5, "Partícula 'wo', indica o objeto direto de um verbo transitivo. Na fala moderna, pronuncia-se 'o'.")
        .not_after(&["で"])
        .not_before(&["の"]),
    GrammarRule::new("も", N5, "Partícula 'mo', indica 'também'")
        .not_after(&["で"])
        .not_before(&["の", "う"]),
    GrammarRule::new("に", N5, "Partícula de tempo/destino")
        .not_after(&["で"])
        .not_before(&["は", "も", "の", "します"]),
    GrammarRule::new("で", N5, "Partícula de local/instrumento")
        .not_after(&["で"])
        .not_before(&["す", "し", "ょ"]),
    GrammarRule::new("へ", N5, "Partícula de direção")
        .not_after(&["で"])
        .not_before(&["の"]),
    GrammarRule::new("と", N5, "Partícula 'e' ou 'com'")
        .not_after(&["で"])
        .not_before(&["いう", "思う"]),
    GrammarRule::new("や", N5, "Partícula 'e' (lista não exaustiva)")
        .not_after(&["で"])
        .not_before(&["く"]),
    GrammarRule::new("の", N5, "Partícula de posse")
        .not_after(&["で"])
        .not_before(&["ば", "り", "き"]),
    GrammarRule::new("から", N5, "Partícula 'de' ou 'porque'").not_before(&["の", "と"]),
    GrammarRule::new("まで", N5, "Partícula 'até'")
        .not_after(&["でし"])
        .not_before(&["の", "と"]),
    // N5 fixed expressions
    GrammarRule::new("てください", N5, "Pedido polido").not_before(&["ょ"]),
    GrammarRule::new("ています", N5, "Ação contínua").not_before(&["ょ"]),
    GrammarRule::new("てはいけません", N5, "Proibição"),
    GrammarRule::new("てもいいです", N5, "Permissão"),
    GrammarRule::new("たことがある", N5, "Experiência passada"),
    GrammarRule::new("ないでください", N5, "Pedido negativo"),
    GrammarRule::new("ながら", N5, "Ação simultânea")
        .not_after(&["で"])
        .not_before(&["の"]),
    GrammarRule::new("たい", N5, "Querer fazer")
        .not_after(&["でし"])
        .not_before(&["い"]),
    GrammarRule::new("たくない", N5, "Não querer fazer").not_before(&["い"]),
    GrammarRule::new("まえに", N5, "Antes de").not_before(&["は"]),
    GrammarRule::new("あとで", N5, "Depois de").not_before(&["は"]),
    GrammarRule::new("とき", N5, "Quando")
        .not_after(&["でし"])
        .not_before(&["は"]),
    // Polite endings
    GrammarRule::new("です", N5, "Verbo ser/estar polido").not_before(&["て"]),
    GrammarRule::new("ます", N5, "Finalizador polido para verbos").not_before(&["て"]),
    GrammarRule::new("でしょう", N4, "Provavelmente").not_before(&["う"]),
    GrammarRule::new("でした", N5, "Passado de 'desu'").not_before(&["た"]),
    GrammarRule::new("ません", N5, "Negativo polido").not_before(&["か"]),
    // N4
    GrammarRule::new("てみる", N4, "Tentar fazer").not_before(&["る"]),
    GrammarRule::new("てしまう", N4, "Ação completa/arrependimento").not_before(&["う"]),
    GrammarRule::new("ておく", N4, "Fazer antecipadamente").not_before(&["く"]),
    GrammarRule::new("てくる", N4, "Ação que se aproxima").not_before(&["る"]),
    GrammarRule::new("ていく", N4, "Ação que se distancia").not_before(&["く"]),
    GrammarRule::new("なければならない", N4, "Ter que fazer"),
    GrammarRule::new("なくてもいい", N4, "Não precisa fazer"),
    GrammarRule::new("ことができる", N4, "Poder/conseguir fazer"),
    GrammarRule::new("ことにする", N4, "Decidir fazer"),
    GrammarRule::new("ことになる", N4, "Foi decidido que"),
    GrammarRule::new("ために", N4, "Para/Devido a"),
    GrammarRule::new("ように", N4, "A fim de que"),
    GrammarRule::new("ようになる", N4, "Tornar-se capaz de"),
    GrammarRule::new("ようにする", N4, "Esforçar-se para"),
    GrammarRule::new("かもしれない", N4, "Talvez"),
    GrammarRule::new("すぎる", N4, "Excesso/demais"),
    GrammarRule::new("やすい", N4, "Fácil de fazer"),
    GrammarRule::new("にくい", N4, "Difícil de fazer"),
    GrammarRule::new("ばかり", N4, "Só faz isso"),
    GrammarRule::new("だけ", N4, "Apenas/somente"),
    GrammarRule::new("しか", N4, "Nada além de").until("ない"),
    GrammarRule::new("のに", N4, "Apesar de"),
    GrammarRule::new("ので", N4, "Porque (formal)"),
    GrammarRule::new("し", N4, "E também"),
    GrammarRule::new("そうだ", N4, "Ouvi dizer que/Parece que"),
    GrammarRule::new("ようです", N4, "Parece que (subjetivo)"),
    GrammarRule::new("らしい", N4, "Parece que (baseado em informação)"),
    // N3
    GrammarRule::new("うちに", N3, "Enquanto (antes que mude)"),
    GrammarRule::new("おかげで", N3, "Graças a"),
    GrammarRule::new("せいで", N3, "Por culpa de"),
    GrammarRule::new("かわりに", N3, "Em vez de/Em troca de"),
    GrammarRule::new("くらい", N3, "Aproximadamente/A ponto de"),
    GrammarRule::new("ぐらい", N3, "Aproximadamente/A ponto de"),
    GrammarRule::new("最中に", N3, "No meio de"),
    GrammarRule::new("さえ", N3, "Até mesmo"),
    GrammarRule::new("という", N3, "Significa que/Ouvi dizer que"),
    GrammarRule::new("といえば", N3, "Falando em..."),
    GrammarRule::new("としたら", N3, "Se supormos que"),
    GrammarRule::new("なんか", N3, "Coisas como (desprezo)"),
    GrammarRule::new("なんて", N3, "Coisas como (desprezo)"),
    GrammarRule::new("に決まっている", N3, "Com certeza é"),
    GrammarRule::new("に比べて", N3, "Comparado com"),
    GrammarRule::new("に対して", N3, "Em relação a"),
    GrammarRule::new("について", N3, "Sobre (assunto)"),
    GrammarRule::new("によって", N3, "Por/Dependendo de"),
    GrammarRule::new("ば", N3, "Quanto mais... mais...").until("ほど"),
    GrammarRule::new("べき", N3, "Deve (obrigação moral)"),
    GrammarRule::new("まるで", N3, "Como se fosse"),
    GrammarRule::new("みたい", N3, "Parece (coloquial)"),
    GrammarRule::new("向け", N3, "Destinado a"),
    GrammarRule::new("向き", N3, "Adequado para"),
    GrammarRule::new("わけがない", N3, "Impossível"),
    GrammarRule::new("わけにはいかない", N3, "Não posso fazer"),
    GrammarRule::new("切る", N3, "Fazer completamente"),
    GrammarRule::new("かける", N3, "Estar no meio de"),
    GrammarRule::new("だす", N3, "Começar de repente"),
    GrammarRule::new("つもりだ", N3, "Crença de que é"),
    GrammarRule::new("てほしい", N3, "Quero que você faça"),
    GrammarRule::new("だらけ", N3, "Cheio de (negativo)"),
    // N2
    GrammarRule::new("あげく", N2, "Depois de muito (resultado ruim)"),
    GrammarRule::new("あまり", N2, "Tão... que (excesso)"),
    GrammarRule::new("以上", N2, "Já que/Visto que"),
    GrammarRule::new("一方だ", N2, "Só faz aumentar/diminuir"),
    GrammarRule::new("うえに", N2, "Além de"),
    GrammarRule::new("おそれがある", N2, "Há o receio/risco de"),
    GrammarRule::new("がち", N2, "Tende a (negativo)"),
    GrammarRule::new("かねない", N2, "Pode acontecer (ruim)"),
    GrammarRule::new("かねる", N2, "Não poder/Ser difícil de fazer"),
    GrammarRule::new("からには", N2, "Já que (determinação forte)"),
    GrammarRule::new("くせに", N2, "Embora (crítica)"),
    GrammarRule::new("こそ", N2, "Ênfase (é exatamente isso)"),
    GrammarRule::new("ことか", N2, "Quão...! (emoção)"),
    GrammarRule::new("ざるを得ない", N2, "Não ter escolha senão fazer"),
    GrammarRule::new("次第", N2, "Assim que/Dependendo de"),
    GrammarRule::new("ずにはいられない", N2, "Não conseguir evitar fazer"),
    GrammarRule::new("だけあって", N2, "Como esperado de"),
    GrammarRule::new("たとたん", N2, "No momento em que (surpresa)"),
    GrammarRule::new("たび", N2, "Toda vez que"),
    GrammarRule::new("て以来", N2, "Desde que"),
    GrammarRule::new("てしょうがない", N2, "Extremamente/Insuportavelmente"),
    GrammarRule::new("どころか", N2, "Longe de ser (é o oposto)"),
    GrammarRule::new("に限り", N2, "Limitado a/Apenas para"),
    GrammarRule::new("にこたえて", N2, "Em resposta a"),
    GrammarRule::new("にすぎない", N2, "Não passa de"),
    GrammarRule::new("に相違ない", N2, "Sem dúvida é (formal)"),
    GrammarRule::new("に沿って", N2, "Seguindo/De acordo com"),
    GrammarRule::new("につれて", N2, "À medida que"),
    GrammarRule::new("にわたって", N2, "Ao longo de"),
    GrammarRule::new("ぬきで", N2, "Sem (omitindo algo)"),
    GrammarRule::new("反面", N2, "Por outro lado"),
    GrammarRule::new("まい", N2, "Provavelmente não/Intenção de não fazer"),
    GrammarRule::new("ものか", N2, "De jeito nenhum! (negação forte)"),
    GrammarRule::new("ものだ", N2, "É natural que/Costumava"),
    GrammarRule::new("ようがない", N2, "Não há como (método)"),
    GrammarRule::new("わけだ", N2, "É por isso que/Conclusão lógica"),
    GrammarRule::new("をきっかけに", N2, "Tendo como gatilho"),
    GrammarRule::new("を通じて", N2, "Através de/Durante todo"),
    GrammarRule::new("を問わず", N2, "Independente de/Sem questionar"),
    // N1
    GrammarRule::new("あっての", N1, "Que existe graças a"),
    GrammarRule::new("いかんだ", N1, "Depende de"),
    GrammarRule::new("うが", N1, "Mesmo que (não importa)"),
    GrammarRule::new("うと", N1, "Mesmo que (não importa)"),
    GrammarRule::new("かぎりだ", N1, "Extremo de (emoção)"),
    GrammarRule::new("が最後", N1, "Uma vez que acontece (acabou)"),
    GrammarRule::new("かたがた", N1, "Enquanto faz X (com propósito Y)"),
    GrammarRule::new("がてら", N1, "Aproveitando a oportunidade"),
    GrammarRule::new("が早いか", N1, "No instante em que"),
    GrammarRule::new("極まる", N1, "Extremamente (negativo)"),
    GrammarRule::new("ごとき", N1, "Como/Do tipo de (depreciativo)"),
    GrammarRule::new("ことなしに", N1, "Sem fazer"),
    GrammarRule::new("始末だ", N1, "Acabou resultando em (mau estado)"),
    GrammarRule::new("ずくめ", N1, "Coberto de/Só tem"),
    GrammarRule::new("すら", N1, "Até mesmo (ênfase extrema)"),
    GrammarRule::new("そばから", N1, "Mal acabou de fazer e já"),
    GrammarRule::new("ただ", N1, "Apenas/Único").until("のみ"),
    GrammarRule::new("たところで", N1, "Mesmo que faça (inútil)"),
    GrammarRule::new("だに", N1, "Só de (já é X)"),
    GrammarRule::new("たる", N1, "Na qualidade de/Como (posição)"),
    GrammarRule::new("てはいられない", N1, "Não posso ficar (fazendo X)"),
    GrammarRule::new("といえども", N1, "Mesmo sendo"),
    GrammarRule::new("と思いきや", N1, "Pensei que fosse, mas (surpresa)"),
    GrammarRule::new("とは", N1, "Expressa surpresa/choque"),
    GrammarRule::new("ないものでもない", N1, "Não é impossível que/Talvez"),
    GrammarRule::new("ながらに", N1, "Enquanto permanece no estado"),
    GrammarRule::new("なくしては", N1, "Sem X, não é possível Y"),
    GrammarRule::new("なり", N1, "Assim que"),
    GrammarRule::new("にはあたらない", N1, "Não vale a pena/Não é necessário"),
    GrammarRule::new("にかたくない", N1, "Não é difícil de (imaginar)"),
    GrammarRule::new("にして", N1, "Sendo X (ênfase em nível/tempo)"),
    GrammarRule::new("に即して", N1, "Em conformidade com"),
    GrammarRule::new("にたえる", N1, "Vale a pena/Suporta"),
    GrammarRule::new("の至り", N1, "O ápice de"),
    GrammarRule::new("はおろか", N1, "Nem se fala em X (que dirá Y)"),
    GrammarRule::new("ばこそ", N1, "Justamente porque"),
    GrammarRule::new("まじき", N1, "Inaceitável para (posição)"),
    GrammarRule::new("までだ", N1, "Apenas isso e nada mais"),
    GrammarRule::new("もさることながら", N1, "Não apenas X, mas também Y"),
    GrammarRule::new("ものを", N1, "Deveria ter feito, mas (lamento)"),
    GrammarRule::new("ゆえに", N1, "Devido a (formal)"),
    GrammarRule::new("をおいて", N1, "Exceto X (não há outro)"),
    GrammarRule::new("を禁じ得ない", N1, "Não conseguir conter (emoção)"),
    GrammarRule::new("をもって", N1, "Por meio de/Com (formal)"),
    GrammarRule::new("を余儀なくされる", N1, "Ser forçado a (circunstâncias)"),
    GrammarRule::new("んがため", N1, "Com o fim de (propósito forte)"),
];
