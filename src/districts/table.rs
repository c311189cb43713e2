/// Built-in phrase -> district table for Wrocław
///
/// Each district appears in its nominative form and in the locative form
/// used in listing descriptions ("na Krzykach", "w Śródmieściu").
pub const WROCLAW_DISTRICTS: &[(&str, &str)] = &[
    ("stare miasto", "stare miasto"),
    ("starym mieście", "stare miasto"),
    ("przedmieście świdnickie", "przedmieście świdnickie"),
    ("przedmieściu świdnickim", "przedmieście świdnickie"),
    ("szczepin", "szczepin"),
    ("szczepinie", "szczepin"),
    ("śródmieście", "śródmieście"),
    ("śródmieściu", "śródmieście"),
    ("bartoszowice", "bartoszowice"),
    ("bartoszowicach", "bartoszowice"),
    ("biskupin", "biskupin"),
    ("biskupine", "biskupin"),
    ("dąbie", "dąbie"),
    ("dąbiu", "dąbie"),
    ("nadodrze", "nadodrze"),
    ("nadodrzu", "nadodrze"),
    ("ołbin", "ołbin"),
    ("ołbinie", "ołbin"),
    ("plac grunwaldzki", "plac grunwaldzki"),
    ("placu grunwaldzkim", "plac grunwaldzki"),
    ("sępolno", "sępolno"),
    ("sępolnie", "sępolno"),
    ("zacisze", "zacisze"),
    ("zaciszu", "zacisze"),
    ("zalesie", "zalesie"),
    ("zalesiu", "zalesie"),
    ("szczytniki", "szczytniki"),
    ("szczytnikach", "szczytniki"),
    ("krzyki", "krzyki"),
    ("krzykach", "krzyki"),
    ("bieńkowice", "bieńkowice"),
    ("bieńkowicach", "bieńkowice"),
    ("bierdzany", "bierdzany"),
    ("bierdzanach", "bierdzany"),
    ("borek", "borek"),
    ("borku", "borek"),
    ("brochów", "brochów"),
    ("brochowie", "brochów"),
    ("dworek", "dworek"),
    ("dworku", "dworek"),
    ("gaj", "gaj"),
    ("gaju", "gaj"),
    ("glinianki", "glinianki"),
    ("gliniankach", "glinianki"),
    ("huby", "huby"),
    ("hubach", "huby"),
    ("jagodno", "jagodno"),
    ("jagodnie", "jagodno"),
    ("klecina", "klecina"),
    ("klecinie", "klecina"),
    ("księże małe", "księże małe"),
    ("księżu małym", "księże małe"),
    ("księże wielkie", "księże wielkie"),
    ("księżu wielkim", "księże wielkie"),
    ("lamowice stare", "lamowice stare"),
    ("lamowicach starych", "lamowice stare"),
    ("nowy dom", "nowy dom"),
    ("nowym domu", "nowy dom"),
    ("ołtaszyn", "ołtaszyn"),
    ("ołtaszynie", "ołtaszyn"),
    ("opatowice", "opatowice"),
    ("opatowicach", "opatowice"),
    ("partynice", "partynice"),
    ("partynicach", "partynice"),
    ("południe", "południe"),
    ("południu", "południe"),
    ("przedmieście oławskie", "przedmieście oławskie"),
    ("przedmieściu oławskim", "przedmieście oławskie"),
    ("rakowiec", "rakowiec"),
    ("rakowcu", "rakowiec"),
    ("siedlec", "siedlec"),
    ("siedlcach", "siedlec"),
    ("świątniki", "świątniki"),
    ("świątnikach", "świątniki"),
    ("tarnogaj", "tarnogaj"),
    ("tarnogaju", "tarnogaj"),
    ("wilczy kąt", "wilczy kąt"),
    ("wilczym kącie", "wilczy kąt"),
    ("wojszyce", "wojszyce"),
    ("wojszycach", "wojszyce"),
    ("psie pole", "psie pole"),
    ("psim polu", "psie pole"),
    ("karłowice", "karłowice"),
    ("karłowicach", "karłowice"),
    ("kleczków", "kleczków"),
    ("kleczkowie", "kleczków"),
    ("kłokoczyce", "kłokoczyce"),
    ("kłokoczycach", "kłokoczyce"),
    ("kowale", "kowale"),
    ("kowalach", "kowale"),
    ("lesica", "lesica"),
    ("lesicy", "lesica"),
    ("ligota", "ligota"),
    ("ligocie", "ligota"),
    ("lipa piotrowska", "lipa piotrowska"),
    ("lipie piotrowskiej", "lipa piotrowska"),
    ("mirowiec", "mirowiec"),
    ("mirowcu", "mirowiec"),
    ("osobowice", "osobowice"),
    ("osobowicach", "osobowice"),
    ("pawłowice", "pawłowice"),
    ("pawłowicach", "pawłowice"),
    ("polanka", "polanka"),
    ("polance", "polanka"),
    ("polanowice", "polanowice"),
    ("polanowicach", "polanowice"),
    ("poświętne", "poświętne"),
    ("poświętnach", "poświętne"),
    ("pracze widawskie", "pracze widawskie"),
    ("praczach widawskich", "pracze widawskie"),
    ("rędzin", "rędzin"),
    ("rędzinie", "rędzin"),
    ("różanka", "różanka"),
    ("różance", "różanka"),
    ("sołtysowice", "sołtysowice"),
    ("sołtysowicach", "sołtysowice"),
    ("strachocin", "strachocin"),
    ("strachocinie", "strachocin"),
    ("swojczyce", "swojczyce"),
    ("swojczycach", "swojczyce"),
    ("świniary", "świniary"),
    ("świniarach", "świniary"),
    ("widawa", "widawa"),
    ("widawach", "widawa"),
    ("wojnów", "wojnów"),
    ("wojnowie", "wojnów"),
    ("zakrzów", "zakrzów"),
    ("zakrzowie", "zakrzów"),
    ("zgorzelisko", "zgorzelisko"),
    ("zgorzelisku", "zgorzelisko"),
    ("fabryczna", "fabryczna"),
    ("fabrycznej", "fabryczna"),
    ("gajowice", "gajowice"),
    ("gajowicach", "gajowice"),
    ("gądów mały", "gądów mały"),
    ("gądowie małym", "gądów mały"),
    ("grabiszyn", "grabiszyn"),
    ("grabiszynie", "grabiszyn"),
    ("grabiszynek", "grabiszynek"),
    ("grabiszynku", "grabiszynek"),
    ("janówek", "janówek"),
    ("janówku", "janówek"),
    ("jarnołtów", "jarnołtów"),
    ("jarnołtowie", "jarnołtów"),
    ("jerzmanowo", "jerzmanowo"),
    ("jerzmanowie", "jerzmanowo"),
    ("kozanów", "kozanów"),
    ("kozanowie", "kozanów"),
    ("kuźniki", "kuźniki"),
    ("kuźnikiach", "kuźniki"),
    ("leśnica", "leśnica"),
    ("leśnicy", "leśnica"),
    ("marszowice", "marszowice"),
    ("marszowicach", "marszowice"),
    ("maślice", "maślice"),
    ("maślicach", "maślice"),
    ("mokra", "mokra"),
    ("mokrej", "mokra"),
    ("muchobór mały", "muchobór mały"),
    ("muchoborze małym", "muchobór mały"),
    ("muchobór wielki", "muchobór wielki"),
    ("muchoborze wielkim", "muchobór wielki"),
    ("nowa karczma", "nowa karczma"),
    ("nowej karczmie", "nowa karczma"),
    ("nowe domy", "nowe domy"),
    ("nowych domach", "nowe domy"),
    ("nowy dwór", "nowy dwór"),
    ("nowym dworze", "nowy dwór"),
    ("oporów", "oporów"),
    ("oporowie", "oporów"),
    ("pilczyce", "pilczyce"),
    ("pilczycach", "pilczyce"),
    ("popowice", "popowice"),
    ("popowicach", "popowice"),
    ("pracze odrzańskie", "pracze odrzańskie"),
    ("praczach odrzańskich", "pracze odrzańskie"),
    ("pustki", "pustki"),
    ("pustkach", "pustki"),
    ("ratyń", "ratyń"),
    ("ratyniu", "ratyń"),
    ("stabłowice", "stabłowice"),
    ("stabłowicach", "stabłowice"),
    ("stabłowice nowe", "stabłowice nowe"),
    ("stabłowicach nowych", "stabłowice nowe"),
    ("strachowice", "strachowice"),
    ("strachowicach", "strachowice"),
    ("osiniec", "osiniec"),
    ("osiniecu", "osiniec"),
    ("złotniki", "złotniki"),
    ("złotnikiach", "złotniki"),
    ("żar", "żar"),
    ("żarach", "żar"),
    ("żerniki", "żerniki"),
    ("kosmonautów", "kosmonautów"),
];
